use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// unique identifier for a loan, generated by the owning repository
pub type LoanId = Uuid;

/// unique identifier for an event, generated by the owning repository
pub type EventId = Uuid;

/// interest recognition method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CalculationMethod {
    /// each day's interest is added to the balance immediately
    #[default]
    DailyAccrual,
    /// interest accumulates during the month and capitalizes on the last day
    AmortizingMonthly,
}

/// financial event kinds applied against a loan balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// reduces the balance
    Repayment,
    /// additional funds drawn, increases the balance
    Drawdown,
    /// charged fee, increases the balance
    Fee,
    /// manual correction, increases the balance
    Adjustment,
}

/// date rendering order for reports and exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DateFormat {
    #[default]
    DayMonthYear,
    MonthDayYear,
}

/// payment cadence carried on loan terms for display, never read by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentFrequency {
    Weekly,
    Fortnightly,
    #[default]
    Monthly,
    Yearly,
}
