use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::parse_ymd;
use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::types::{CalculationMethod, LoanId, PaymentFrequency};

/// static terms for one loan, immutable over a projection run
///
/// the engine consumes `principal`, `annual_rate`, `start_date` and
/// `calculation_method`; the remaining fields are carried for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub id: LoanId,
    pub name: String,
    pub principal: Money,
    pub annual_rate: Rate,
    pub start_date: NaiveDate,
    pub calculation_method: CalculationMethod,

    // display-only fields
    pub term_years: u32,
    pub payment_frequency: PaymentFrequency,
    pub notes: Option<String>,
}

impl LoanTerms {
    /// builder for creating loan terms
    pub fn builder() -> TermsBuilder {
        TermsBuilder::new()
    }
}

/// builder for [`LoanTerms`]
///
/// a non-positive principal is accepted here: the engine treats it as a
/// defined degenerate input and returns the empty projection. a negative
/// rate is a construction error.
#[derive(Debug, Default)]
pub struct TermsBuilder {
    name: Option<String>,
    principal: Option<Money>,
    annual_rate: Option<Rate>,
    start_date: Option<NaiveDate>,
    calculation_method: CalculationMethod,
    term_years: u32,
    payment_frequency: PaymentFrequency,
    notes: Option<String>,
}

impl TermsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn principal(mut self, principal: Money) -> Self {
        self.principal = Some(principal);
        self
    }

    /// annual rate as a fraction (0.055 for 5.5%)
    pub fn annual_rate(mut self, rate: Rate) -> Self {
        self.annual_rate = Some(rate);
        self
    }

    /// annual rate as a percentage (5.5 for 5.5%)
    pub fn annual_percentage_rate(mut self, percent: rust_decimal::Decimal) -> Self {
        self.annual_rate = Some(Rate::from_percentage(percent));
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// start date from a YYYY-MM-DD string, validated at build time
    pub fn start_date_str(mut self, date: &str) -> Result<Self> {
        self.start_date = Some(parse_ymd(date)?);
        Ok(self)
    }

    pub fn calculation_method(mut self, method: CalculationMethod) -> Self {
        self.calculation_method = method;
        self
    }

    pub fn term_years(mut self, years: u32) -> Self {
        self.term_years = years;
        self
    }

    pub fn payment_frequency(mut self, frequency: PaymentFrequency) -> Self {
        self.payment_frequency = frequency;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn build(self) -> Result<LoanTerms> {
        let name = self.name.ok_or(LedgerError::InvalidTerms {
            message: "name is required".to_string(),
        })?;
        let principal = self.principal.ok_or(LedgerError::InvalidTerms {
            message: "principal is required".to_string(),
        })?;
        let annual_rate = self.annual_rate.ok_or(LedgerError::InvalidTerms {
            message: "annual rate is required".to_string(),
        })?;
        let start_date = self.start_date.ok_or(LedgerError::InvalidTerms {
            message: "start date is required".to_string(),
        })?;

        if annual_rate.is_negative() {
            return Err(LedgerError::InvalidRate { rate: annual_rate });
        }

        Ok(LoanTerms {
            id: Uuid::new_v4(),
            name,
            principal,
            annual_rate,
            start_date,
            calculation_method: self.calculation_method,
            term_years: self.term_years,
            payment_frequency: self.payment_frequency,
            notes: self.notes,
        })
    }
}
