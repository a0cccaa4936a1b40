use thiserror::Error;
use uuid::Uuid;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("loan not paid off within {ceiling_months} months: balance {remaining_balance} remains")]
    PayoffNotReached {
        ceiling_months: u32,
        remaining_balance: Money,
    },

    #[error("balance left decimal range after {month} months: last balance {last_balance}")]
    BalanceOverflow {
        month: u32,
        last_balance: Money,
    },

    #[error("comparison is full: at most {limit} loans")]
    ComparisonFull {
        limit: usize,
    },

    #[error("comparison must keep at least one loan")]
    LastComparisonLoan,

    #[error("loan not found in comparison: {id}")]
    LoanNotFound {
        id: Uuid,
    },

    #[error("unsupported currency: {code}")]
    UnsupportedCurrency {
        code: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoanError>;
