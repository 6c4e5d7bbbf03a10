use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::config::LoanTerms;
use crate::decimal::{Money, Rate};
use crate::engine::simulate;
use crate::events::{merge_timeline, RateChange, Transaction};
use crate::schedule::Projection;
use crate::types::LoanId;

/// a loan as the repository hands it over: static terms plus the two
/// insertion-ordered event collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub terms: LoanTerms,
    pub transactions: Vec<Transaction>,
    pub rate_changes: Vec<RateChange>,
}

impl Loan {
    pub fn new(terms: LoanTerms) -> Self {
        Self {
            terms,
            transactions: Vec::new(),
            rate_changes: Vec::new(),
        }
    }

    pub fn record_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn record_rate_change(&mut self, rate_change: RateChange) {
        self.rate_changes.push(rate_change);
    }

    /// project the loan up to an explicit horizon date
    ///
    /// recomputes from scratch on every call; edits to terms or events are
    /// picked up by simply projecting again
    pub fn project(&self, as_of: NaiveDate) -> Projection {
        let timeline = merge_timeline(&self.transactions, &self.rate_changes);
        simulate(&self.terms, &timeline, as_of)
    }

    /// project up to the time provider's current date
    pub fn project_now(&self, time: &SafeTimeProvider) -> Projection {
        self.project(time.now().date_naive())
    }

    /// parse a loan from its json snapshot
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// serializable dashboard snapshot of a loan at a horizon date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanView {
    pub id: LoanId,
    pub name: String,
    pub principal: Money,
    pub annual_rate: Rate,
    pub start_date: NaiveDate,
    pub as_of: NaiveDate,
    pub current_balance: Money,
    pub total_interest: Money,
    pub transaction_count: usize,
    pub rate_change_count: usize,
}

impl LoanView {
    pub fn from_loan(loan: &Loan, as_of: NaiveDate) -> Self {
        let projection = loan.project(as_of);

        LoanView {
            id: loan.terms.id,
            name: loan.terms.name.clone(),
            principal: loan.terms.principal,
            annual_rate: loan.terms.annual_rate,
            start_date: loan.terms.start_date,
            as_of,
            current_balance: projection.summary.current_balance,
            total_interest: projection.summary.total_interest,
            transaction_count: loan.transactions.len(),
            rate_change_count: loan.rate_changes.len(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use hourglass_rs::TimeSource;
    use rust_decimal_macros::dec;

    use crate::types::{CalculationMethod, TransactionKind};

    fn sample_loan() -> Loan {
        let terms = LoanTerms::builder()
            .name("Business Loan")
            .principal(Money::from_major(50_000))
            .annual_percentage_rate(dec!(6))
            .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .calculation_method(CalculationMethod::DailyAccrual)
            .build()
            .unwrap();

        let mut loan = Loan::new(terms);
        loan.record_transaction(
            Transaction::new(
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                TransactionKind::Repayment,
                Money::from_major(2_000),
                "Repayment",
            )
            .unwrap(),
        );
        loan.record_rate_change(
            RateChange::new(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                Rate::from_percentage(dec!(6.5)),
            )
            .unwrap(),
        );
        loan
    }

    #[test]
    fn test_project_matches_merge_plus_simulate() {
        let loan = sample_loan();
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();

        let via_loan = loan.project(as_of);
        let timeline = merge_timeline(&loan.transactions, &loan.rate_changes);
        let via_engine = simulate(&loan.terms, &timeline, as_of);

        assert_eq!(via_loan, via_engine);
    }

    #[test]
    fn test_project_now_uses_time_provider_date() {
        let loan = sample_loan();
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 6, 30, 14, 30, 0).unwrap(),
        ));

        let via_now = loan.project_now(&time);
        let via_date = loan.project(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());

        assert_eq!(via_now, via_date);
    }

    #[test]
    fn test_json_round_trip() {
        let loan = sample_loan();

        let json = loan.to_json_pretty().unwrap();
        let restored = Loan::from_json(&json).unwrap();

        assert_eq!(loan, restored);
        // a restored loan projects identically
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(loan.project(as_of), restored.project(as_of));
    }

    #[test]
    fn test_loan_view_snapshot() {
        let loan = sample_loan();
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();

        let view = LoanView::from_loan(&loan, as_of);

        assert_eq!(view.id, loan.terms.id);
        assert_eq!(view.transaction_count, 1);
        assert_eq!(view.rate_change_count, 1);
        assert_eq!(view.current_balance, loan.project(as_of).summary.current_balance);
        assert!(view.total_interest > Money::ZERO);
    }
}
