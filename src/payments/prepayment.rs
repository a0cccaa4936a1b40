use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::payments::emi::compute_summary;
use crate::types::Tenure;

/// year-end balances with and without prepayment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepaymentSnapshot {
    pub year: u32,
    pub balance_with_prepayment: Money,
    pub balance_without_prepayment: Money,
}

/// outcome of paying a fixed extra amount every month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepaymentResult {
    /// negative when the prepayment parameters make the loan more expensive
    pub interest_saved: Money,
    pub tenure_reduced_months: i64,
    /// months to payoff in years, one decimal
    pub new_tenure_years: Decimal,
    pub months_to_payoff: u32,
    pub total_interest_paid: Money,
    pub amortization_data: Vec<PrepaymentSnapshot>,
}

impl PrepaymentResult {
    fn untouched(tenure: Tenure) -> Self {
        Self {
            interest_saved: Money::ZERO,
            tenure_reduced_months: 0,
            new_tenure_years: tenure.years(),
            months_to_payoff: 0,
            total_interest_paid: Money::ZERO,
            amortization_data: Vec::new(),
        }
    }
}

/// simulates the original EMI plus a fixed monthly prepayment until payoff
pub struct PrepaymentSimulator<'a> {
    config: &'a CalculatorConfig,
}

impl<'a> PrepaymentSimulator<'a> {
    pub fn new(config: &'a CalculatorConfig) -> Self {
        Self { config }
    }

    /// run the simulation
    ///
    /// Fails with [`LoanError::PayoffNotReached`] when the balance is still
    /// positive after the configured ceiling, e.g. when the EMI plus the
    /// prepayment cannot cover the accruing interest, and with
    /// [`LoanError::BalanceOverflow`] when that growth leaves decimal range
    /// first.
    pub fn simulate(
        &self,
        principal: Money,
        annual_rate: Rate,
        tenure: Tenure,
        monthly_prepayment: Money,
    ) -> Result<PrepaymentResult> {
        if !principal.is_positive() {
            tracing::debug!(principal = %principal, "non-positive principal, nothing to prepay");
            return Ok(PrepaymentResult::untouched(tenure));
        }

        let monthly_rate = annual_rate.monthly_rate().as_decimal();
        let original = compute_summary(principal, annual_rate, tenure);
        let original_emi = original.emi;
        let original_months = tenure.payment_count();
        let ceiling = self.config.payoff_ceiling(original_months);

        let mut balance = principal;
        let mut months: u32 = 0;
        let mut total_interest_paid = Money::ZERO;
        let mut with_prepayment = Vec::new();

        while balance.is_positive() {
            if months >= ceiling {
                tracing::warn!(
                    principal = %principal,
                    annual_rate = %annual_rate,
                    monthly_prepayment = %monthly_prepayment,
                    ceiling_months = ceiling,
                    remaining_balance = %balance,
                    "prepayment simulation did not reach payoff"
                );
                return Err(LoanError::PayoffNotReached {
                    ceiling_months: ceiling,
                    remaining_balance: balance,
                });
            }

            let step = pay_month(balance, monthly_rate, original_emi).and_then(
                |(interest, after_emi)| {
                    Some((
                        after_emi.checked_sub(monthly_prepayment)?,
                        total_interest_paid.checked_add(interest)?,
                    ))
                },
            );
            let Some((next_balance, interest_to_date)) = step else {
                tracing::warn!(
                    principal = %principal,
                    annual_rate = %annual_rate,
                    month = months,
                    last_balance = %balance,
                    "prepayment simulation overflowed"
                );
                return Err(LoanError::BalanceOverflow {
                    month: months,
                    last_balance: balance,
                });
            };

            balance = next_balance;
            total_interest_paid = interest_to_date;
            months += 1;

            if months % 12 == 0 || !balance.is_positive() {
                with_prepayment.push(balance.floor_zero());
            }
        }

        let amortization_data =
            pair_with_original_trajectory(&with_prepayment, principal, monthly_rate, original_emi)?;

        let new_total_payment = principal.checked_add(total_interest_paid).ok_or(
            LoanError::BalanceOverflow {
                month: months,
                last_balance: balance,
            },
        )?;
        let new_tenure_years = (Decimal::from(months) / Decimal::from(12))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);

        tracing::debug!(
            principal = %principal,
            monthly_prepayment = %monthly_prepayment,
            months_to_payoff = months,
            original_months,
            "prepayment simulation finished"
        );

        Ok(PrepaymentResult {
            interest_saved: original.total_payment - new_total_payment,
            tenure_reduced_months: i64::from(original_months) - i64::from(months),
            new_tenure_years,
            months_to_payoff: months,
            total_interest_paid,
            amortization_data,
        })
    }
}

/// one month of interest accrual and a fixed payment: (interest, new balance)
fn pay_month(balance: Money, monthly_rate: Decimal, payment: Money) -> Option<(Money, Money)> {
    let interest = balance.checked_mul(monthly_rate)?;
    let principal_paid = payment.checked_sub(interest)?;
    Some((interest, balance.checked_sub(principal_paid)?))
}

/// replay the loan without prepayment in 12-month blocks, one per snapshot
fn pair_with_original_trajectory(
    with_prepayment: &[Money],
    principal: Money,
    monthly_rate: Decimal,
    original_emi: Money,
) -> Result<Vec<PrepaymentSnapshot>> {
    let mut balance_without = principal;

    with_prepayment
        .iter()
        .zip(1u32..)
        .map(|(&balance_with, year)| {
            for month in 0..12 {
                balance_without = pay_month(balance_without, monthly_rate, original_emi)
                    .map(|(_, balance)| balance)
                    .ok_or(LoanError::BalanceOverflow {
                        month: (year - 1) * 12 + month,
                        last_balance: balance_without,
                    })?;
            }

            Ok(PrepaymentSnapshot {
                year,
                balance_with_prepayment: balance_with,
                balance_without_prepayment: balance_without.floor_zero(),
            })
        })
        .collect()
}

/// prepayment impact using the default configuration
pub fn simulate_prepayment(
    principal: Money,
    annual_rate: Rate,
    tenure: Tenure,
    monthly_prepayment: Money,
) -> Result<PrepaymentResult> {
    PrepaymentSimulator::new(&CalculatorConfig::default()).simulate(
        principal,
        annual_rate,
        tenure,
        monthly_prepayment,
    )
}
