use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::types::{EventId, TransactionKind};

/// a financial movement against the loan balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: EventId,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: String,
    pub notes: Option<String>,
}

impl Transaction {
    /// create a new transaction, rejecting non-positive amounts
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
    ) -> Result<Self> {
        if amount <= Money::ZERO {
            return Err(LedgerError::InvalidAmount { amount });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            date,
            kind,
            amount,
            category: category.into(),
            notes: None,
        })
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// a change of the annual interest rate, effective from its date onward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateChange {
    pub id: EventId,
    pub date: NaiveDate,
    pub new_rate: Rate,
}

impl RateChange {
    /// create a new rate change, rejecting negative rates
    pub fn new(date: NaiveDate, new_rate: Rate) -> Result<Self> {
        if new_rate.is_negative() {
            return Err(LedgerError::InvalidRate { rate: new_rate });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            date,
            new_rate,
        })
    }
}

/// everything that can happen to a loan on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoanEvent {
    Transaction(Transaction),
    RateChange(RateChange),
}

impl LoanEvent {
    pub fn date(&self) -> NaiveDate {
        match self {
            LoanEvent::Transaction(tx) => tx.date,
            LoanEvent::RateChange(rc) => rc.date,
        }
    }
}

/// merge the repository's two insertion-ordered collections into one
/// chronological timeline.
///
/// transactions are concatenated ahead of rate changes and the sort is
/// stable, so every transaction dated D lands before any rate change dated D.
/// the simulation relies on that ordering: a same-day repayment must shrink
/// the balance before the new rate is swapped in, and both must land before
/// that day's interest is computed. duplicate events are kept, they are
/// independent movements.
pub fn merge_timeline(transactions: &[Transaction], rate_changes: &[RateChange]) -> Vec<LoanEvent> {
    let mut events: Vec<LoanEvent> = Vec::with_capacity(transactions.len() + rate_changes.len());
    events.extend(transactions.iter().cloned().map(LoanEvent::Transaction));
    events.extend(rate_changes.iter().cloned().map(LoanEvent::RateChange));
    events.sort_by_key(|event| event.date());
    events
}
