use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid event amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidRate {
        rate: Rate,
    },

    #[error("invalid loan terms: {message}")]
    InvalidTerms {
        message: String,
    },

    #[error("export failed: {0}")]
    Export(#[from] csv::Error),

    #[error("export io failed: {0}")]
    ExportIo(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
