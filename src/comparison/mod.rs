pub mod balance_transfer;
pub mod multi_loan;

pub use balance_transfer::{compare_balance_transfer, BalanceTransferResult};
pub use multi_loan::{ComparisonLoan, ComparisonRow, LoanComparison};
