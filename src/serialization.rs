//! json views handed to the presentation layer
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::calculator::LoanCalculator;
use crate::comparison::{BalanceTransferResult, ComparisonRow, LoanComparison};
use crate::decimal::Money;
use crate::errors::Result;
use crate::payments::{LoanSummary, PaymentBreakdown, PrepaymentResult, YearlyAmortization};
use crate::types::{BalanceTransferOffer, ComparisonId, LoanInput};

/// emi calculator view: totals, breakdown and yearly schedule
#[derive(Debug, Serialize, Deserialize)]
pub struct EmiReport {
    pub currency: String,
    pub input: LoanInput,
    pub summary: LoanSummary,
    pub breakdown: PaymentBreakdown,
    pub schedule: Vec<YearlyAmortization>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PrepaymentReport {
    pub currency: String,
    pub input: LoanInput,
    pub monthly_prepayment: Money,
    pub result: PrepaymentResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceTransferReport {
    pub currency: String,
    pub current_loan: LoanInput,
    pub offer: BalanceTransferOffer,
    pub result: BalanceTransferResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub currency: String,
    pub rows: Vec<ComparisonRow>,
    pub cheapest: Option<ComparisonId>,
}

impl EmiReport {
    pub fn build(
        calculator: &LoanCalculator,
        input: &LoanInput,
        currency: Option<&str>,
        time_provider: &SafeTimeProvider,
    ) -> Self {
        let schedule = calculator.schedule_for(input, time_provider);

        EmiReport {
            currency: calculator.currency(currency).to_string(),
            input: LoanInput {
                start_date: Some(schedule.start_date),
                ..input.clone()
            },
            summary: calculator.summary(input),
            breakdown: calculator.breakdown(input),
            schedule: schedule.into_years(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl PrepaymentReport {
    pub fn build(
        calculator: &LoanCalculator,
        input: &LoanInput,
        monthly_prepayment: Money,
        currency: Option<&str>,
    ) -> Result<Self> {
        Ok(PrepaymentReport {
            currency: calculator.currency(currency).to_string(),
            input: input.clone(),
            monthly_prepayment,
            result: calculator.prepayment(input, monthly_prepayment)?,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl BalanceTransferReport {
    pub fn build(
        calculator: &LoanCalculator,
        current_loan: &LoanInput,
        offer: &BalanceTransferOffer,
        currency: Option<&str>,
    ) -> Self {
        BalanceTransferReport {
            currency: calculator.currency(currency).to_string(),
            current_loan: current_loan.clone(),
            offer: offer.clone(),
            result: calculator.balance_transfer(current_loan, offer),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ComparisonReport {
    pub fn build(calculator: &LoanCalculator, comparison: &LoanComparison, currency: Option<&str>) -> Self {
        ComparisonReport {
            currency: calculator.currency(currency).to_string(),
            rows: comparison.results(),
            cheapest: comparison.cheapest().map(|row| row.id),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
