use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// one simulated day of a loan's life
///
/// `balance` is the end-of-day figure after that day's events and
/// capitalization policy have been applied. `accrued_interest` is the
/// lifetime running total, which keeps growing even while interest is
/// parked in the monthly bucket and has not yet touched the balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub daily_interest: Money,
    pub accrued_interest: Money,
    pub balance: Money,
}

/// headline figures derived from the last simulated day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Summary {
    /// lifetime interest recognized, capitalized or not
    pub total_interest: Money,
    /// end balance floored at zero; overpayment is not reported as a credit
    pub current_balance: Money,
}

/// full output of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Projection {
    pub schedule: Vec<ScheduleEntry>,
    pub summary: Summary,
}
