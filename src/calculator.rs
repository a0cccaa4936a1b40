use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;

use crate::comparison::{compare_balance_transfer, BalanceTransferResult, LoanComparison};
use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::payments::{
    compute_emi, compute_summary, AmortizationSchedule, LoanSummary, PaymentBreakdown,
    PrepaymentResult, PrepaymentSimulator,
};
use crate::types::{BalanceTransferOffer, LoanInput, Tenure};

/// entry point carrying the configuration every calculation runs under
#[derive(Debug, Clone, Default)]
pub struct LoanCalculator {
    config: CalculatorConfig,
}

impl LoanCalculator {
    /// validates the configuration before accepting it
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// currency label for display; unknown codes fall back to the default
    pub fn currency<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        self.config.currency.resolve(requested)
    }

    pub fn emi(&self, input: &LoanInput) -> Money {
        compute_emi(input.principal, input.annual_rate, input.tenure)
    }

    pub fn summary(&self, input: &LoanInput) -> LoanSummary {
        compute_summary(input.principal, input.annual_rate, input.tenure)
    }

    pub fn breakdown(&self, input: &LoanInput) -> PaymentBreakdown {
        PaymentBreakdown::from_summary(input.principal, &self.summary(input))
    }

    pub fn schedule(
        &self,
        principal: Money,
        annual_rate: Rate,
        tenure: Tenure,
        start_date: NaiveDate,
    ) -> AmortizationSchedule {
        AmortizationSchedule::generate(principal, annual_rate, tenure, start_date, &self.config.schedule)
    }

    /// schedule for an input, starting today when it has no start date
    pub fn schedule_for(
        &self,
        input: &LoanInput,
        time_provider: &SafeTimeProvider,
    ) -> AmortizationSchedule {
        AmortizationSchedule::generate_for(input, &self.config.schedule, time_provider)
    }

    pub fn prepayment(&self, input: &LoanInput, monthly_prepayment: Money) -> Result<PrepaymentResult> {
        PrepaymentSimulator::new(&self.config).simulate(
            input.principal,
            input.annual_rate,
            input.tenure,
            monthly_prepayment,
        )
    }

    pub fn balance_transfer(
        &self,
        current: &LoanInput,
        offer: &BalanceTransferOffer,
    ) -> BalanceTransferResult {
        compare_balance_transfer(current, offer)
    }

    /// empty comparison bounded by the configured loan limit
    pub fn comparison(&self) -> LoanComparison {
        LoanComparison::new(self.config.comparison.max_loans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LoanError;
    use hourglass_rs::TimeSource;
    use rust_decimal_macros::dec;

    fn sample() -> LoanInput {
        LoanInput::new(
            Money::from_major(100_000),
            Rate::from_percent(dec!(8.5)),
            Tenure::from_years(5),
        )
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = CalculatorConfig::default();
        config.comparison.max_loans = 0;
        assert!(matches!(
            LoanCalculator::new(config),
            Err(LoanError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_operations_agree_with_free_functions() {
        let calc = LoanCalculator::default();
        let input = sample();

        assert_eq!(calc.emi(&input), compute_emi(input.principal, input.annual_rate, input.tenure));
        assert_eq!(calc.summary(&input).emi, calc.emi(&input));
        assert_eq!(calc.breakdown(&input).principal, input.principal);
    }

    #[test]
    fn test_schedule_epsilon_comes_from_config() {
        let mut config = CalculatorConfig::default();
        config.schedule.balance_epsilon = Money::from_decimal(dec!(0.5));
        let calc = LoanCalculator::new(config).unwrap();

        let time = SafeTimeProvider::new(TimeSource::Test("2025-01-01T00:00:00Z".parse().unwrap()));
        let schedule = calc.schedule_for(&sample(), &time);
        assert_eq!(schedule.final_balance(), Money::ZERO);
        assert_eq!(schedule.years.first().unwrap().label, "2025");
    }

    #[test]
    fn test_comparison_limit_comes_from_config() {
        let mut config = CalculatorConfig::default();
        config.comparison.max_loans = 3;
        let calc = LoanCalculator::new(config).unwrap();
        assert_eq!(calc.comparison().max_loans(), 3);
    }

    #[test]
    fn test_currency_label() {
        let calc = LoanCalculator::default();
        assert_eq!(calc.currency(Some("GBP")), "GBP");
        assert_eq!(calc.currency(Some("BTC")), "INR");
    }
}
