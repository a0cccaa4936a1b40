use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::payments::emi::{compute_summary, LoanSummary};
use crate::types::{BalanceTransferOffer, LoanInput};

/// current loan against a refinancing offer with the fee capitalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceTransferResult {
    pub current_summary: LoanSummary,
    pub new_summary: LoanSummary,
    pub fee_amount: Money,
    pub new_principal: Money,
    /// positive when the transfer costs less overall
    pub total_savings: Money,
}

impl BalanceTransferResult {
    pub fn is_beneficial(&self) -> bool {
        self.total_savings.is_positive()
    }

    /// reduction in monthly installment, negative when the new EMI is higher
    pub fn emi_difference(&self) -> Money {
        self.current_summary.emi - self.new_summary.emi
    }
}

pub fn compare_balance_transfer(
    current: &LoanInput,
    offer: &BalanceTransferOffer,
) -> BalanceTransferResult {
    let current_summary = compute_summary(current.principal, current.annual_rate, current.tenure);

    let fee_amount = current.principal.percentage(offer.fee_percent);
    let new_principal = current.principal + fee_amount;
    let new_summary = compute_summary(new_principal, offer.annual_rate, offer.tenure);

    let total_savings = current_summary.total_payment - new_summary.total_payment;

    tracing::debug!(
        current_total = %current_summary.total_payment,
        new_total = %new_summary.total_payment,
        fee = %fee_amount,
        savings = %total_savings,
        "balance transfer compared"
    );

    BalanceTransferResult {
        current_summary,
        new_summary,
        fee_amount,
        new_principal,
        total_savings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::types::Tenure;
    use rust_decimal_macros::dec;

    fn current_loan() -> LoanInput {
        LoanInput::new(
            Money::from_major(50_000),
            Rate::from_percentage(12),
            Tenure::from_years(3),
        )
    }

    #[test]
    fn test_fee_is_capitalized() {
        let offer = BalanceTransferOffer::new(Rate::from_percentage(9), Tenure::from_years(3), dec!(1));
        let result = compare_balance_transfer(&current_loan(), &offer);

        assert_eq!(result.fee_amount, Money::from_major(500));
        assert_eq!(result.new_principal, Money::from_major(50_500));
        assert_eq!(
            result.new_summary,
            compute_summary(Money::from_major(50_500), Rate::from_percentage(9), Tenure::from_years(3))
        );
    }

    #[test]
    fn test_lower_rate_saves_money() {
        let offer = BalanceTransferOffer::new(Rate::from_percentage(9), Tenure::from_years(3), dec!(1));
        let result = compare_balance_transfer(&current_loan(), &offer);

        assert_eq!(
            result.total_savings,
            result.current_summary.total_payment - result.new_summary.total_payment
        );
        assert_eq!(result.total_savings.round_dp(2), Money::from_decimal(dec!(1973.84)));
        assert!(result.is_beneficial());
        assert!(result.emi_difference().is_positive());
    }

    #[test]
    fn test_high_fee_makes_transfer_a_loss() {
        let offer = BalanceTransferOffer::new(Rate::from_percentage(11), Tenure::from_years(3), dec!(5));
        let result = compare_balance_transfer(&current_loan(), &offer);

        assert!(result.total_savings.is_negative());
        assert!(!result.is_beneficial());
    }

    #[test]
    fn test_deterministic() {
        let offer = BalanceTransferOffer::new(Rate::from_percentage(9), Tenure::from_years(3), dec!(1));
        let first = compare_balance_transfer(&current_loan(), &offer);
        let second = compare_balance_transfer(&current_loan(), &offer);
        assert_eq!(first, second);
    }
}
