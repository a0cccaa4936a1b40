//! Fixed-rate loan calculations: EMI, loan totals, amortization schedules,
//! prepayment impact, balance transfer savings and multi-loan comparison.
//!
//! All amounts are [`Money`] values backed by [`rust_decimal::Decimal`].
//! Degenerate inputs (non-positive principal, rate or tenure) produce zeroed
//! or empty results instead of errors.
//!
//! ```
//! use loan_lens_rs::{compute_summary, Money, Rate, Tenure};
//! use rust_decimal_macros::dec;
//!
//! let summary = compute_summary(
//!     Money::from_major(100_000),
//!     Rate::from_percent(dec!(8.5)),
//!     Tenure::from_years(5),
//! );
//! assert_eq!(summary.emi.round_dp(2), Money::from_decimal(dec!(2051.65)));
//! ```

pub mod calculator;
pub mod comparison;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod payments;
pub mod serialization;
pub mod types;

// re-export key types
pub use calculator::LoanCalculator;
pub use comparison::{
    compare_balance_transfer, BalanceTransferResult, ComparisonLoan, ComparisonRow,
    LoanComparison,
};
pub use config::{
    CalculatorConfig, ComparisonConfig, CurrencyConfig, PrepaymentConfig, ScheduleConfig,
};
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use payments::{
    compute_emi, compute_summary, generate_schedule, simulate_prepayment, AmortizationSchedule,
    LoanSummary, MonthlyAmortization, PaymentBreakdown, PrepaymentResult, PrepaymentSimulator,
    PrepaymentSnapshot, YearlyAmortization,
};
pub use serialization::{BalanceTransferReport, ComparisonReport, EmiReport, PrepaymentReport};
pub use types::{BalanceTransferOffer, ComparisonId, LoanInput, Tenure};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
