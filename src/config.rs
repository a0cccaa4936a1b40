use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LoanError, Result};

/// absolute bound on simulated prepayment months, whatever the tenure
pub const PAYOFF_MONTHS_LIMIT: u32 = 12_000;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub currency: CurrencyConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub prepayment: PrepaymentConfig,
    #[serde(default)]
    pub comparison: ComparisonConfig,
}

/// recognized currency labels; amounts are never converted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub supported: Vec<String>,
    pub default_currency: String,
}

/// amortization schedule settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// residual balance below this on the final payment is forced to zero
    pub balance_epsilon: Money,
}

/// prepayment simulation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepaymentConfig {
    /// hard ceiling on simulated months before giving up on payoff
    pub max_payoff_months: u32,
}

/// multi-loan comparison settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    pub max_loans: usize,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            supported: ["INR", "USD", "EUR", "GBP", "JPY", "AUD", "CAD", "SGD", "AED"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            default_currency: "INR".to_string(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            balance_epsilon: Money::ONE,
        }
    }
}

impl Default for PrepaymentConfig {
    fn default() -> Self {
        // 100 years of monthly payments
        Self {
            max_payoff_months: 1200,
        }
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self { max_loans: 5 }
    }
}

impl CurrencyConfig {
    pub fn is_supported(&self, code: &str) -> bool {
        self.supported.iter().any(|c| c == code)
    }

    /// requested code when recognized, otherwise the default
    pub fn resolve<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(code) if self.is_supported(code) => code,
            _ => &self.default_currency,
        }
    }

    /// strict lookup for callers that want to reject unknown codes
    pub fn require(&self, code: &str) -> Result<&str> {
        self.supported
            .iter()
            .find(|c| c.as_str() == code)
            .map(String::as_str)
            .ok_or_else(|| LoanError::UnsupportedCurrency {
                code: code.to_string(),
            })
    }
}

impl CalculatorConfig {
    /// parse and validate a json configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.currency.supported.is_empty() {
            return Err(invalid("currency list is empty"));
        }

        if let Some(code) = self.currency.supported.iter().find(|c| !is_currency_code(c)) {
            return Err(invalid(&format!(
                "currency code {code:?} is not three uppercase letters"
            )));
        }

        if !self.currency.is_supported(&self.currency.default_currency) {
            return Err(invalid(&format!(
                "default currency {} is not in the supported list",
                self.currency.default_currency
            )));
        }

        if !self.schedule.balance_epsilon.is_positive() {
            return Err(invalid("balance epsilon must be positive"));
        }

        if self.prepayment.max_payoff_months == 0 {
            return Err(invalid("prepayment ceiling must be at least one month"));
        }

        if self.prepayment.max_payoff_months > PAYOFF_MONTHS_LIMIT {
            return Err(invalid(&format!(
                "prepayment ceiling may not exceed {PAYOFF_MONTHS_LIMIT} months"
            )));
        }

        if self.comparison.max_loans == 0 {
            return Err(invalid("comparison must allow at least one loan"));
        }

        Ok(())
    }

    /// months the prepayment loop may run for a loan with `payment_count` payments
    ///
    /// Long tenures get a year of slack past their own term, up to
    /// [`PAYOFF_MONTHS_LIMIT`].
    pub fn payoff_ceiling(&self, payment_count: u32) -> u32 {
        self.prepayment
            .max_payoff_months
            .max(payment_count.saturating_add(12))
            .min(PAYOFF_MONTHS_LIMIT)
    }
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

fn invalid(message: &str) -> LoanError {
    LoanError::InvalidConfiguration {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CalculatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.currency.default_currency, "INR");
        assert_eq!(config.comparison.max_loans, 5);
    }

    #[test]
    fn test_currency_resolution_falls_back_to_default() {
        let currency = CurrencyConfig::default();
        assert_eq!(currency.resolve(Some("USD")), "USD");
        assert_eq!(currency.resolve(Some("XYZ")), "INR");
        assert_eq!(currency.resolve(None), "INR");

        assert!(currency.require("EUR").is_ok());
        assert!(matches!(
            currency.require("usd"),
            Err(LoanError::UnsupportedCurrency { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_section_defaults() {
        let json = r#"{
            "currency": { "supported": ["USD", "EUR"], "default_currency": "USD" }
        }"#;

        let config = CalculatorConfig::from_json(json).unwrap();
        assert_eq!(config.currency.resolve(Some("INR")), "USD");
        assert_eq!(config.prepayment.max_payoff_months, 1200);
        assert_eq!(config.schedule.balance_epsilon, Money::ONE);
    }

    #[test]
    fn test_validation_rejects_bad_currency_lists() {
        let mut config = CalculatorConfig::default();
        config.currency.default_currency = "CHF".to_string();
        assert!(matches!(
            config.validate(),
            Err(LoanError::InvalidConfiguration { .. })
        ));

        let mut config = CalculatorConfig::default();
        config.currency.supported.push("dollars".to_string());
        assert!(config.validate().is_err());

        let mut config = CalculatorConfig::default();
        config.currency.supported.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_limits() {
        let mut config = CalculatorConfig::default();
        config.prepayment.max_payoff_months = 0;
        assert!(config.validate().is_err());

        let mut config = CalculatorConfig::default();
        config.comparison.max_loans = 0;
        assert!(config.validate().is_err());

        let mut config = CalculatorConfig::default();
        config.schedule.balance_epsilon = Money::ZERO;
        assert!(config.validate().is_err());

        let mut config = CalculatorConfig::default();
        config.prepayment.max_payoff_months = PAYOFF_MONTHS_LIMIT + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_a_serialization_error() {
        assert!(matches!(
            CalculatorConfig::from_json("{ not json"),
            Err(LoanError::Serialization(_))
        ));
    }

    #[test]
    fn test_payoff_ceiling_covers_long_tenures() {
        let config = CalculatorConfig::default();
        assert_eq!(config.payoff_ceiling(240), 1200);
        assert_eq!(config.payoff_ceiling(1800), 1812);
    }

    #[test]
    fn test_payoff_ceiling_is_bounded_for_huge_tenures() {
        let config = CalculatorConfig::default();
        assert_eq!(config.payoff_ceiling(u32::MAX), PAYOFF_MONTHS_LIMIT);
        assert_eq!(config.payoff_ceiling(12_000_000), PAYOFF_MONTHS_LIMIT);

        let mut config = CalculatorConfig::default();
        config.prepayment.max_payoff_months = PAYOFF_MONTHS_LIMIT;
        assert!(config.validate().is_ok());
        assert_eq!(config.payoff_ceiling(0), PAYOFF_MONTHS_LIMIT);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = CalculatorConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert_eq!(CalculatorConfig::from_json(&json).unwrap(), config);
    }
}
