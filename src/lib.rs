pub mod config;
pub mod dates;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod events;
pub mod export;
pub mod loan;
pub mod report;
pub mod schedule;
pub mod types;

// re-export key types
pub use config::{LoanTerms, TermsBuilder};
pub use dates::{days_between, format_date, parse_ymd};
pub use decimal::{Money, Rate};
pub use engine::simulate;
pub use errors::{LedgerError, Result};
pub use events::{merge_timeline, LoanEvent, RateChange, Transaction};
pub use export::{write_events_csv, write_monthly_report_csv, write_schedule_csv};
pub use loan::{Loan, LoanView};
pub use report::{
    filter_events, filter_schedule, financial_year, monthly_report, MonthlyReportEntry,
};
pub use schedule::{Projection, ScheduleEntry, Summary};
pub use types::{
    CalculationMethod, DateFormat, EventId, LoanId, PaymentFrequency, TransactionKind,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
