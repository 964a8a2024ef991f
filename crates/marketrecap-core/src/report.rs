//! Plain-text report rendering.
//!
//! [`ReportAssembler::assemble`] is a pure function of the snapshot, the
//! optional narrative and the dates fixed at construction. Sections appear
//! in a fixed order; missing data drops a line or a whole section, never
//! the report.

use crate::config::ReportMode;
use crate::{AssetRecord, MarketSnapshot, RateRecord, ReportDates, Sentiment, TreasuryMaturity, YieldRecord};

pub const RISING_YIELDS_BEARISH: &str =
    "📉 Rising Treasury yields may be contributing to crypto selling pressure as investors seek safer yields";
pub const RISING_YIELDS_RESILIENT: &str =
    "📈 Despite rising yields, crypto showing resilience - risk appetite remains strong";
pub const FALLING_YIELDS_BULLISH: &str =
    "📈 Falling Treasury yields supporting crypto rally as risk assets become more attractive";
pub const FALLING_YIELDS_DECOUPLED: &str =
    "📊 Lower yields not translating to crypto gains - other factors driving market sentiment";
pub const ANALYSIS_UNAVAILABLE: &str = "📊 Market data analysis unavailable";

const BASE_HASHTAGS: &str = "#Crypto #Markets #Treasury #Finance #DigitalAssets #TradFi #DeFi";
const CLOSING_HASHTAGS: &str = " #MarketRecap #ClosingPrices";
const CLOSE_SUFFIX: &str = " from previous close";

/// Canned correlation sentence for a yield move and a sentiment.
///
/// A strictly positive change counts as rising; zero is grouped with
/// falling.
pub fn canned_correlation(yield_change: f64, sentiment: Sentiment) -> &'static str {
    match (yield_change > 0.0, sentiment) {
        (true, Sentiment::Bearish) => RISING_YIELDS_BEARISH,
        (true, _) => RISING_YIELDS_RESILIENT,
        (false, Sentiment::Bullish) => FALLING_YIELDS_BULLISH,
        (false, _) => FALLING_YIELDS_DECOUPLED,
    }
}

/// Renders a [`MarketSnapshot`] for one mode and one pair of dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportAssembler {
    mode: ReportMode,
    dates: ReportDates,
    benchmark: TreasuryMaturity,
}

impl ReportAssembler {
    pub fn new(mode: ReportMode, dates: ReportDates, benchmark: TreasuryMaturity) -> Self {
        Self {
            mode,
            dates,
            benchmark,
        }
    }

    pub fn assemble(&self, snapshot: &MarketSnapshot, narrative: Option<&str>) -> String {
        let sentiment = snapshot.sentiment();
        let mut lines = self.header();

        lines.push(String::new());
        lines.push(format!("📈 CRYPTOCURRENCY PERFORMANCE ({}):", self.period_label()));
        lines.extend(snapshot.assets().map(|record| self.asset_line(record)));

        if let Some(record) = snapshot.treasury() {
            lines.push(String::new());
            lines.push(format!("🏛️ TREASURY YIELD UPDATE{}:", self.section_suffix()));
            lines.push(self.yield_line(record));
        }

        if snapshot.has_rates() {
            lines.push(String::new());
            lines.push(format!("💵 SHORT-TERM RATES{}:", self.section_suffix()));
            lines.extend(
                snapshot
                    .rates()
                    .map(|(name, record)| self.rate_line(name, record)),
            );
        }

        lines.push(String::new());
        lines.push(String::from("🔗 MARKET CORRELATION ANALYSIS:"));
        lines.push(correlation_body(snapshot, sentiment, narrative));

        lines.push(String::new());
        lines.push(String::from("📋 MARKET SUMMARY:"));
        lines.push(format!("🎯 Overall Sentiment: {}", sentiment.label()));
        lines.push(format!("🌊 Risk Appetite: {}", sentiment.risk_appetite().as_str()));
        lines.push(format!("💡 Key Takeaway: {}", sentiment.takeaway()));
        lines.push(String::new());
        lines.push(self.hashtags());

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    fn header(&self) -> Vec<String> {
        match self.mode {
            ReportMode::Spot => vec![format!(
                "🚀 CRYPTO MARKET UPDATE - {} 🚀",
                self.dates.run_label()
            )],
            ReportMode::Closing => {
                let data_label = self.dates.data_label();
                vec![
                    format!("🚀 DAILY MARKET RECAP - {data_label} 🚀"),
                    format!("📊 Based on {data_label} Market Closing Prices"),
                    format!("📅 Report Generated: {}", self.dates.run_label()),
                ]
            }
        }
    }

    fn period_label(&self) -> &'static str {
        match self.mode {
            ReportMode::Spot => "24h",
            ReportMode::Closing => "Day-over-Day",
        }
    }

    fn section_suffix(&self) -> &'static str {
        match self.mode {
            ReportMode::Spot => "",
            ReportMode::Closing => " (Closing)",
        }
    }

    fn change_suffix(&self) -> &'static str {
        match self.mode {
            ReportMode::Spot => "",
            ReportMode::Closing => CLOSE_SUFFIX,
        }
    }

    fn asset_line(&self, record: &AssetRecord) -> String {
        format!(
            "{} {}: ${} ({}%{})",
            direction_marker(record.percent_change),
            record.symbol,
            format_usd(record.current_value),
            format_signed(record.percent_change),
            self.change_suffix()
        )
    }

    fn yield_line(&self, record: &YieldRecord) -> String {
        format!(
            "📊 {}: {:.2}% ({}bps{})",
            self.benchmark.label(),
            record.current_value,
            format_signed(record.change),
            self.change_suffix()
        )
    }

    fn rate_line(&self, name: &str, record: &RateRecord) -> String {
        let mut line = format!(
            "{} {name}: {:.2}% ({}bps{})",
            direction_marker(record.change),
            record.current_value,
            format_signed(record.change),
            self.change_suffix()
        );
        if let Some(note) = &record.note {
            line.push(' ');
            line.push_str(note);
        }
        line
    }

    fn hashtags(&self) -> String {
        match self.mode {
            ReportMode::Spot => BASE_HASHTAGS.to_owned(),
            ReportMode::Closing => format!("{BASE_HASHTAGS}{CLOSING_HASHTAGS}"),
        }
    }
}

fn correlation_body(snapshot: &MarketSnapshot, sentiment: Sentiment, narrative: Option<&str>) -> String {
    if let Some(text) = narrative.map(str::trim).filter(|text| !text.is_empty()) {
        return text.to_owned();
    }
    match snapshot.treasury() {
        Some(record) if snapshot.has_assets() => canned_correlation(record.change, sentiment).to_owned(),
        _ => ANALYSIS_UNAVAILABLE.to_owned(),
    }
}

fn direction_marker(change: f64) -> &'static str {
    if change > 0.0 {
        "🟢"
    } else {
        "🔴"
    }
}

/// Two decimals with comma thousands separators: `67,000.50`.
pub fn format_usd(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 4);
    if value < 0.0 {
        grouped.push('-');
    }
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}

/// Two decimals with an explicit sign: `+1.82`, `-0.05`.
pub fn format_signed(value: f64) -> String {
    format!("{value:+.2}")
}
