use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::Tenure;

/// totals for a fixed-rate loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoanSummary {
    pub emi: Money,
    pub total_payment: Money,
    pub total_interest: Money,
}

impl LoanSummary {
    pub fn is_zero(&self) -> bool {
        self.emi.is_zero() && self.total_payment.is_zero() && self.total_interest.is_zero()
    }
}

/// principal vs interest split of the total payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaymentBreakdown {
    pub principal: Money,
    pub total_interest: Money,
    pub principal_percent: Decimal,
    pub interest_percent: Decimal,
}

impl PaymentBreakdown {
    pub fn from_summary(principal: Money, summary: &LoanSummary) -> Self {
        if summary.is_zero() {
            return Self::default();
        }

        Self {
            principal,
            total_interest: summary.total_interest,
            principal_percent: principal.percent_of(summary.total_payment).round_dp(2),
            interest_percent: summary.total_interest.percent_of(summary.total_payment).round_dp(2),
        }
    }
}

/// equated monthly installment for a fixed-rate loan
///
/// Non-positive inputs and any arithmetic failure (an EMI past decimal range,
/// a monthly rate too small to move `1 + r` off one) give zero rather than an
/// error.
pub fn compute_emi(principal: Money, annual_rate: Rate, tenure: Tenure) -> Money {
    if !principal.is_positive() || !annual_rate.is_positive() || !tenure.is_positive() {
        return Money::ZERO;
    }

    let monthly_rate = annual_rate.monthly_rate().as_decimal();
    annuity_payment(principal.as_decimal(), monthly_rate, tenure.months())
        .map(Money::from_decimal)
        .unwrap_or(Money::ZERO)
}

/// EMI = P * r * c / (c - 1) with c = (1 + r)^n
///
/// `c / (c - 1)` is taken first so a large compounding factor never
/// overflows the product. Once `c` itself is beyond decimal range the
/// ratio is one to full precision and the EMI is plain interest.
fn annuity_payment(principal: Decimal, r: Decimal, n: Decimal) -> Option<Decimal> {
    let ratio = match (Decimal::ONE + r).checked_powd(n) {
        Some(compound) => {
            let denominator = compound.checked_sub(Decimal::ONE)?;
            if denominator <= Decimal::ZERO {
                return None;
            }
            compound.checked_div(denominator)?
        }
        None => {
            // powd also gives up on exponents past u32, which need not mean c is huge
            let growth = (Decimal::ONE + r).checked_ln()?.checked_mul(n)?;
            if growth < Decimal::from(60) {
                return None;
            }
            Decimal::ONE
        }
    };

    let emi = principal.checked_mul(r)?.checked_mul(ratio)?;

    (emi > Decimal::ZERO).then_some(emi)
}

/// EMI plus total payment and total interest over the tenure
pub fn compute_summary(principal: Money, annual_rate: Rate, tenure: Tenure) -> LoanSummary {
    let emi = compute_emi(principal, annual_rate, tenure);
    if emi.is_zero() {
        return LoanSummary::default();
    }

    match emi.checked_mul(tenure.months()) {
        Some(total_payment) => LoanSummary {
            emi,
            total_payment,
            total_interest: total_payment - principal,
        },
        None => LoanSummary::default(),
    }
}
