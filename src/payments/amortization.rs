use chrono::{Datelike, Months, NaiveDate};
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;
use crate::decimal::{Money, Rate};
use crate::payments::emi::compute_emi;
use crate::types::{LoanInput, Tenure};

/// one monthly payment in an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAmortization {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub emi: Money,
    pub interest_paid: Money,
    pub principal_paid: Money,
    /// balance after this payment
    pub balance: Money,
    /// percent of the principal repaid so far
    pub loan_paid_to_date: Decimal,
}

/// payments grouped by calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyAmortization {
    pub label: String,
    pub year: i32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub total_payment: Money,
    pub balance: Money,
    pub loan_paid_to_date: Decimal,
    pub months: Vec<MonthlyAmortization>,
}

impl YearlyAmortization {
    fn open(year: i32) -> Self {
        Self {
            label: year.to_string(),
            year,
            principal_paid: Money::ZERO,
            interest_paid: Money::ZERO,
            total_payment: Money::ZERO,
            balance: Money::ZERO,
            loan_paid_to_date: Decimal::ZERO,
            months: Vec::new(),
        }
    }

    fn push(&mut self, month: MonthlyAmortization) {
        self.principal_paid += month.principal_paid;
        self.interest_paid += month.interest_paid;
        self.total_payment += month.emi;
        self.balance = month.balance;
        self.loan_paid_to_date = month.loan_paid_to_date;
        self.months.push(month);
    }
}

/// month-by-month amortization of a fixed-rate loan, grouped by year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure: Tenure,
    pub start_date: NaiveDate,
    pub emi: Money,
    pub years: Vec<YearlyAmortization>,
}

impl AmortizationSchedule {
    /// generate schedule starting in the calendar month of `start_date`
    pub fn generate(
        principal: Money,
        annual_rate: Rate,
        tenure: Tenure,
        start_date: NaiveDate,
        config: &ScheduleConfig,
    ) -> Self {
        let emi = compute_emi(principal, annual_rate, tenure);

        let years = if emi.is_positive() {
            build_years(principal, annual_rate, tenure, start_date, emi, config.balance_epsilon)
        } else {
            tracing::debug!(
                principal = %principal,
                annual_rate = %annual_rate,
                tenure = %tenure,
                "degenerate loan input, empty schedule"
            );
            Vec::new()
        };

        Self {
            principal,
            annual_rate,
            tenure,
            start_date,
            emi,
            years,
        }
    }

    /// generate schedule for an input, starting today when it has no start date
    pub fn generate_for(
        input: &LoanInput,
        config: &ScheduleConfig,
        time_provider: &SafeTimeProvider,
    ) -> Self {
        let start_date = input
            .start_date
            .unwrap_or_else(|| time_provider.now().date_naive());

        Self::generate(input.principal, input.annual_rate, input.tenure, start_date, config)
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// every monthly entry in chronological order
    pub fn months(&self) -> impl Iterator<Item = &MonthlyAmortization> {
        self.years.iter().flat_map(|y| y.months.iter())
    }

    pub fn payment_count(&self) -> usize {
        self.years.iter().map(|y| y.months.len()).sum()
    }

    pub fn total_principal_paid(&self) -> Money {
        self.years.iter().map(|y| y.principal_paid).sum()
    }

    pub fn total_interest_paid(&self) -> Money {
        self.years.iter().map(|y| y.interest_paid).sum()
    }

    pub fn final_balance(&self) -> Money {
        self.years.last().map(|y| y.balance).unwrap_or(Money::ZERO)
    }

    pub fn into_years(self) -> Vec<YearlyAmortization> {
        self.years
    }
}

fn build_years(
    principal: Money,
    annual_rate: Rate,
    tenure: Tenure,
    start_date: NaiveDate,
    emi: Money,
    balance_epsilon: Money,
) -> Vec<YearlyAmortization> {
    let monthly_rate = annual_rate.monthly_rate().as_decimal();
    let payment_count = tenure.payment_count();
    let first_month = start_date.with_day(1).unwrap_or(start_date);

    let mut years: Vec<YearlyAmortization> = Vec::new();
    let mut balance = principal;

    for index in 0..payment_count {
        let Some(period) = first_month.checked_add_months(Months::new(index)) else {
            break;
        };

        let interest_paid = balance * monthly_rate;
        let principal_paid = emi - interest_paid;
        balance -= principal_paid;

        // drift must not leave a residual on a fully amortized loan
        if index + 1 == payment_count && balance.abs() < balance_epsilon {
            balance = Money::ZERO;
        }

        let loan_paid_to_date = (principal - balance).percent_of(principal).round_dp(4);

        let entry = MonthlyAmortization {
            label: period.format("%b %Y").to_string(),
            year: period.year(),
            month: period.month(),
            emi,
            interest_paid,
            principal_paid,
            balance,
            loan_paid_to_date,
        };

        match years.last_mut() {
            Some(current) if current.year == entry.year => current.push(entry),
            _ => {
                let mut year = YearlyAmortization::open(entry.year);
                year.push(entry);
                years.push(year);
            }
        }
    }

    tracing::debug!(
        principal = %principal,
        emi = %emi,
        payments = payment_count,
        years = years.len(),
        final_balance = %balance,
        "amortization schedule generated"
    );

    years
}

/// yearly amortization entries for a loan starting at `start_date`
pub fn generate_schedule(
    principal: Money,
    annual_rate: Rate,
    tenure: Tenure,
    start_date: NaiveDate,
) -> Vec<YearlyAmortization> {
    AmortizationSchedule::generate(
        principal,
        annual_rate,
        tenure,
        start_date,
        &ScheduleConfig::default(),
    )
    .into_years()
}
