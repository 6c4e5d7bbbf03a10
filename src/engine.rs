use chrono::{Datelike, Duration, NaiveDate};
use log::{debug, warn};

use crate::config::LoanTerms;
use crate::decimal::Money;
use crate::events::LoanEvent;
use crate::schedule::{Projection, ScheduleEntry, Summary};
use crate::types::{CalculationMethod, TransactionKind};

/// replay a loan day by day from `terms.start_date` to `as_of` inclusive.
///
/// pure function: identical terms, timeline and horizon always produce an
/// identical projection, and nothing persists between calls. the timeline
/// must be the chronological merge produced by
/// [`merge_timeline`](crate::events::merge_timeline).
///
/// each day runs the same three steps in strict order: apply every event
/// dated today (repayments subtract, drawdowns/fees/adjustments add, a rate
/// change swaps the annual rate for today onward), then accrue Actual/365
/// interest on the post-event balance when it is positive, then apply the
/// capitalization policy for `terms.calculation_method`. the balance is never
/// clamped mid-simulation; an overpayment leaves it negative and interest
/// simply stops accruing until a drawdown brings it positive again.
///
/// degenerate inputs are not errors: a non-positive principal yields the
/// empty projection, and a start date after `as_of` yields an empty schedule
/// whose summary still reports the untouched principal.
///
/// events dated before the current simulation day (including anything dated
/// before `start_date`) can never match the day cursor and are skipped with
/// a warning rather than left to block the rest of the queue; events dated
/// after `as_of` are never reached.
pub fn simulate(terms: &LoanTerms, timeline: &[LoanEvent], as_of: NaiveDate) -> Projection {
    if terms.principal <= Money::ZERO {
        return Projection::default();
    }

    let mut balance = terms.principal;
    let mut annual_rate = terms.annual_rate;
    let mut total_accrued_interest = Money::ZERO;
    let mut month_bucket = Money::ZERO;

    let mut schedule = Vec::new();
    let mut cursor = 0usize; // next unconsumed timeline entry
    let mut current = terms.start_date;

    while current <= as_of {
        // stale entries can never match the day-equality check again
        while cursor < timeline.len() && timeline[cursor].date() < current {
            warn!(
                "loan {}: skipping event dated {} before simulation day {}",
                terms.id,
                timeline[cursor].date(),
                current
            );
            cursor += 1;
        }

        // apply everything dated today, in timeline order
        while cursor < timeline.len() && timeline[cursor].date() == current {
            match &timeline[cursor] {
                LoanEvent::Transaction(tx) => match tx.kind {
                    TransactionKind::Repayment => balance -= tx.amount,
                    TransactionKind::Drawdown
                    | TransactionKind::Fee
                    | TransactionKind::Adjustment => balance += tx.amount,
                },
                LoanEvent::RateChange(rc) => annual_rate = rc.new_rate,
            }
            cursor += 1;
        }

        // Actual/365 accrual on the post-event balance
        let mut daily_interest = Money::ZERO;
        if balance > Money::ZERO {
            daily_interest = balance * annual_rate.daily_rate().as_decimal();
            total_accrued_interest += daily_interest;
        }

        match terms.calculation_method {
            CalculationMethod::DailyAccrual => {
                if balance > Money::ZERO {
                    balance += daily_interest;
                }
            }
            CalculationMethod::AmortizingMonthly => {
                if balance > Money::ZERO {
                    month_bucket += daily_interest;
                }
                // capitalize the whole bucket on the last day of the month
                let tomorrow = current + Duration::days(1);
                if tomorrow.day() == 1 {
                    balance += month_bucket;
                    month_bucket = Money::ZERO;
                }
            }
        }

        schedule.push(ScheduleEntry {
            date: current,
            daily_interest,
            accrued_interest: total_accrued_interest,
            balance,
        });

        current += Duration::days(1);
    }

    let summary = Summary {
        total_interest: total_accrued_interest,
        current_balance: balance.max(Money::ZERO),
    };

    debug!(
        "loan {}: projected {} days to {}, total interest {}",
        terms.id,
        schedule.len(),
        as_of,
        summary.total_interest
    );

    Projection { schedule, summary }
}
