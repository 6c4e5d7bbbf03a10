use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;

use crate::dates::format_date;
use crate::decimal::Money;
use crate::errors::Result;
use crate::events::LoanEvent;
use crate::report::MonthlyReportEntry;
use crate::schedule::ScheduleEntry;
use crate::types::DateFormat;

/// amounts in exports are rendered at cent precision
fn format_amount(amount: Money) -> String {
    format!("{:.2}", amount.round_dp(2).as_decimal())
}

fn format_percent(percent: Decimal) -> String {
    format!("{:.2}", percent.round_dp(2))
}

/// write a daily schedule with the standard report columns
pub fn write_schedule_csv<W: Write>(
    writer: W,
    schedule: &[ScheduleEntry],
    date_format: DateFormat,
) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["Date", "Daily Interest", "Accrued Interest", "Ending Balance"])?;

    for entry in schedule {
        csv.write_record([
            format_date(entry.date, date_format),
            format_amount(entry.daily_interest),
            format_amount(entry.accrued_interest),
            format_amount(entry.balance),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// write a month-bucketed schedule, as used for amortizing-monthly loans
pub fn write_monthly_report_csv<W: Write>(
    writer: W,
    report: &[MonthlyReportEntry],
    date_format: DateFormat,
) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["Month End", "Interest This Month", "Ending Balance"])?;

    for entry in report {
        csv.write_record([
            format_date(entry.date, date_format),
            format_amount(entry.interest_for_month),
            format_amount(entry.end_of_month_balance),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// write an event list; rate changes render as a "Rate Change" row with the
/// new percentage in the amount column
pub fn write_events_csv<W: Write>(
    writer: W,
    events: &[LoanEvent],
    date_format: DateFormat,
) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["Date", "Type", "Category", "Amount", "Notes"])?;

    for event in events {
        match event {
            LoanEvent::Transaction(tx) => {
                csv.write_record([
                    format_date(tx.date, date_format),
                    format!("{:?}", tx.kind),
                    tx.category.clone(),
                    format_amount(tx.amount),
                    tx.notes.clone().unwrap_or_default(),
                ])?;
            }
            LoanEvent::RateChange(rc) => {
                let percent = format_percent(rc.new_rate.as_percentage());
                csv.write_record([
                    format_date(rc.date, date_format),
                    "Rate Change".to_string(),
                    String::new(),
                    percent.clone(),
                    format!("New rate: {}%", percent),
                ])?;
            }
        }
    }

    csv.flush()?;
    Ok(())
}
