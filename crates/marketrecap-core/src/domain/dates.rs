use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, Weekday};

/// Run date and the trading day the fetched closes belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDates {
    pub run_date: Date,
    pub data_date: Date,
}

impl ReportDates {
    /// Backdate to the previous trading day on a five-day week: Monday
    /// reports Friday, Sunday reports Friday, every other day reports the
    /// day before. Exchange holidays are not considered.
    pub fn for_run(run_date: Date) -> Self {
        let days_back = match run_date.weekday() {
            Weekday::Monday => 3,
            Weekday::Sunday => 2,
            _ => 1,
        };
        let data_date = run_date
            .checked_sub(Duration::days(days_back))
            .unwrap_or(run_date);

        Self {
            run_date,
            data_date,
        }
    }

    pub fn run_label(&self) -> String {
        long_date(self.run_date)
    }

    pub fn data_label(&self) -> String {
        long_date(self.data_date)
    }
}

/// `October 05, 2026` style label.
pub fn long_date(date: Date) -> String {
    date.format(format_description!("[month repr:long] [day], [year]"))
        .unwrap_or_else(|_| date.to_string())
}

/// `20261016_093012` style stamp used in output file names.
pub fn file_stamp(at: OffsetDateTime) -> String {
    at.format(format_description!(
        "[year][month][day]_[hour][minute][second]"
    ))
    .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn monday_reports_previous_friday() {
        let dates = ReportDates::for_run(date!(2026 - 10 - 19));
        assert_eq!(dates.data_date, date!(2026 - 10 - 16));
    }

    #[test]
    fn sunday_reports_previous_friday() {
        let dates = ReportDates::for_run(date!(2026 - 10 - 18));
        assert_eq!(dates.data_date, date!(2026 - 10 - 16));
    }

    #[test]
    fn midweek_reports_previous_day() {
        let dates = ReportDates::for_run(date!(2026 - 10 - 14));
        assert_eq!(dates.data_date, date!(2026 - 10 - 13));
    }

    #[test]
    fn saturday_reports_friday() {
        let dates = ReportDates::for_run(date!(2026 - 10 - 17));
        assert_eq!(dates.data_date, date!(2026 - 10 - 16));
    }

    #[test]
    fn labels_use_long_month_and_padded_day() {
        let dates = ReportDates::for_run(date!(2026 - 10 - 06));
        assert_eq!(dates.run_label(), "October 06, 2026");
        assert_eq!(dates.data_label(), "October 05, 2026");
    }

    #[test]
    fn file_stamp_is_compact() {
        assert_eq!(file_stamp(datetime!(2026-10-16 09:30:12 UTC)), "20261016_093012");
    }
}
