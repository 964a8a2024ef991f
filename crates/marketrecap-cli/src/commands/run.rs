use std::sync::Arc;

use marketrecap_core::{HttpClient, MarketRecap, ReportMode};
use time::OffsetDateTime;
use tracing::info;

use super::build_config;
use crate::cli::{Cli, RunArgs};
use crate::error::CliError;
use crate::output::{framed, ReportWriter};

pub fn run(cli: &Cli, args: &RunArgs, http_client: Arc<dyn HttpClient>) -> Result<(), CliError> {
    let mode = ReportMode::from(args.mode);
    let recap = MarketRecap::new(build_config(cli, mode)?, http_client)?;

    let now = local_now();
    let outcome = recap.run(now.date());
    println!("{}", framed(mode, &outcome.text));

    if args.no_write {
        info!("--no-write set, report not saved");
        return Ok(());
    }

    let path = ReportWriter::new(&args.output_dir).write(mode, now, &outcome.text)?;
    info!(path = %path.display(), "report saved");
    Ok(())
}

/// Local wall-clock time, or UTC when the local offset cannot be determined.
fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
