use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::decimal::{Money, Rate};

/// unique identifier for a loan inside a comparison
pub type ComparisonId = Uuid;

/// loan tenure in years, whole or fractional
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Tenure(Decimal);

impl Tenure {
    pub fn from_years(years: u32) -> Self {
        Tenure(Decimal::from(years))
    }

    pub fn from_years_decimal(years: Decimal) -> Self {
        Tenure(years)
    }

    pub fn years(&self) -> Decimal {
        self.0
    }

    /// tenure in months, fractional when years are
    pub fn months(&self) -> Decimal {
        self.0.checked_mul(Decimal::from(12)).unwrap_or(Decimal::MAX)
    }

    /// number of monthly payments needed to cover the tenure
    pub fn payment_count(&self) -> u32 {
        if !self.is_positive() {
            return 0;
        }
        self.months().ceil().to_u32().unwrap_or(u32::MAX)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y", self.0.normalize())
    }
}

/// caller-supplied loan parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure: Tenure,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl LoanInput {
    pub fn new(principal: Money, annual_rate: Rate, tenure: Tenure) -> Self {
        Self {
            principal,
            annual_rate,
            tenure,
            start_date: None,
        }
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// principal, rate and tenure all strictly positive
    pub fn is_well_formed(&self) -> bool {
        self.principal.is_positive() && self.annual_rate.is_positive() && self.tenure.is_positive()
    }
}

/// refinancing offer for an outstanding loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceTransferOffer {
    pub annual_rate: Rate,
    pub tenure: Tenure,
    /// processing fee as a percent of the transferred principal
    pub fee_percent: Decimal,
}

impl BalanceTransferOffer {
    pub fn new(annual_rate: Rate, tenure: Tenure, fee_percent: Decimal) -> Self {
        Self {
            annual_rate,
            tenure,
            fee_percent,
        }
    }
}
