use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::events::LoanEvent;
use crate::schedule::ScheduleEntry;

/// one calendar month of a projection, as shown in monthly reports
///
/// aggregation only regroups engine output: summed daily interest and the
/// bucket's last balance, nothing is recomputed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReportEntry {
    pub year: i32,
    pub month: u32,
    /// date of the bucket's last schedule entry (month end, or the horizon)
    pub date: NaiveDate,
    pub interest_for_month: Money,
    pub end_of_month_balance: Money,
}

/// schedule entries falling inside the inclusive date range
pub fn filter_schedule(
    schedule: &[ScheduleEntry],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<ScheduleEntry> {
    schedule
        .iter()
        .filter(|entry| entry.date >= from && entry.date <= to)
        .cloned()
        .collect()
}

/// events falling inside the inclusive date range
pub fn filter_events(events: &[LoanEvent], from: NaiveDate, to: NaiveDate) -> Vec<LoanEvent> {
    events
        .iter()
        .filter(|event| event.date() >= from && event.date() <= to)
        .cloned()
        .collect()
}

/// group a day-indexed schedule into calendar-month buckets
///
/// the schedule is contiguous and sorted, so consecutive entries sharing a
/// year-month form one bucket
pub fn monthly_report(schedule: &[ScheduleEntry]) -> Vec<MonthlyReportEntry> {
    let mut report: Vec<MonthlyReportEntry> = Vec::new();

    for entry in schedule {
        let year = entry.date.year();
        let month = entry.date.month();

        match report.last_mut() {
            Some(bucket) if bucket.year == year && bucket.month == month => {
                bucket.date = entry.date;
                bucket.interest_for_month += entry.daily_interest;
                bucket.end_of_month_balance = entry.balance;
            }
            _ => report.push(MonthlyReportEntry {
                year,
                month,
                date: entry.date,
                interest_for_month: entry.daily_interest,
                end_of_month_balance: entry.balance,
            }),
        }
    }

    report
}

/// australian financial year: 1 july of `start_year` through 30 june
pub fn financial_year(start_year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(start_year, 7, 1).ok_or(LedgerError::InvalidDate {
        message: format!("year {} out of range", start_year),
    })?;
    let end = NaiveDate::from_ymd_opt(start_year + 1, 6, 30).ok_or(LedgerError::InvalidDate {
        message: format!("year {} out of range", start_year + 1),
    })?;
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::config::LoanTerms;
    use crate::decimal::Rate;
    use crate::engine::simulate;
    use crate::events::{merge_timeline, RateChange, Transaction};
    use crate::types::{CalculationMethod, TransactionKind};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn projected_schedule() -> Vec<ScheduleEntry> {
        let terms = LoanTerms::builder()
            .name("Report Loan")
            .principal(Money::from_major(10_000))
            .annual_percentage_rate(dec!(12))
            .start_date(ymd(2024, 4, 1))
            .calculation_method(CalculationMethod::AmortizingMonthly)
            .build()
            .unwrap();

        simulate(&terms, &[], ymd(2024, 6, 15)).schedule
    }

    #[test]
    fn test_monthly_report_buckets_by_calendar_month() {
        let schedule = projected_schedule();
        let report = monthly_report(&schedule);

        assert_eq!(report.len(), 3); // april, may, partial june
        assert_eq!((report[0].year, report[0].month), (2024, 4));
        assert_eq!((report[1].year, report[1].month), (2024, 5));
        assert_eq!((report[2].year, report[2].month), (2024, 6));

        assert_eq!(report[0].date, ymd(2024, 4, 30));
        assert_eq!(report[1].date, ymd(2024, 5, 31));
        // the last bucket ends at the horizon, not at month end
        assert_eq!(report[2].date, ymd(2024, 6, 15));
    }

    #[test]
    fn test_monthly_report_preserves_engine_output() {
        let schedule = projected_schedule();
        let report = monthly_report(&schedule);

        // bucket interest is the sum of the dailies
        let mut april_interest = Money::ZERO;
        for entry in &schedule[..30] {
            april_interest += entry.daily_interest;
        }
        assert_eq!(report[0].interest_for_month, april_interest);

        // bucket balance is the bucket's last entry balance, untouched
        assert_eq!(report[0].end_of_month_balance, schedule[29].balance);

        // total across buckets matches the lifetime accumulator
        let mut total = Money::ZERO;
        for bucket in &report {
            total += bucket.interest_for_month;
        }
        assert_eq!(total, schedule.last().unwrap().accrued_interest);
    }

    #[test]
    fn test_filter_schedule_inclusive_bounds() {
        let schedule = projected_schedule();
        let filtered = filter_schedule(&schedule, ymd(2024, 5, 1), ymd(2024, 5, 31));

        assert_eq!(filtered.len(), 31);
        assert_eq!(filtered.first().unwrap().date, ymd(2024, 5, 1));
        assert_eq!(filtered.last().unwrap().date, ymd(2024, 5, 31));
    }

    #[test]
    fn test_filter_events_inclusive_bounds() {
        let transactions = vec![
            Transaction::new(ymd(2024, 1, 1), TransactionKind::Repayment, Money::from_major(100), "Repayment").unwrap(),
            Transaction::new(ymd(2024, 2, 15), TransactionKind::Fee, Money::from_major(10), "Account Fee").unwrap(),
        ];
        let rate_changes = vec![
            RateChange::new(ymd(2024, 3, 1), Rate::from_percentage(dec!(6))).unwrap(),
        ];
        let events = merge_timeline(&transactions, &rate_changes);

        let filtered = filter_events(&events, ymd(2024, 2, 15), ymd(2024, 3, 1));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].date(), ymd(2024, 2, 15));
        assert_eq!(filtered[1].date(), ymd(2024, 3, 1));
    }

    #[test]
    fn test_financial_year_range() {
        let (start, end) = financial_year(2023).unwrap();
        assert_eq!(start, ymd(2023, 7, 1));
        assert_eq!(end, ymd(2024, 6, 30));
    }
}
