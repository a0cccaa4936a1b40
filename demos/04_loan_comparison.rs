/// compare several loan offers side by side
use loan_lens_rs::{CalculatorConfig, ComparisonReport, LoanCalculator, LoanInput, Money, Rate, Tenure};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::from_json(
        r#"{
            "currency": { "supported": ["USD", "EUR"], "default_currency": "USD" },
            "comparison": { "max_loans": 3 }
        }"#,
    )?;
    let calc = LoanCalculator::new(config)?;

    let mut comparison = calc.comparison();
    let amount = Money::from_major(100_000);
    comparison.add_loan("Bank A", LoanInput::new(amount, Rate::from_percent(dec!(8.5)), Tenure::from_years(10)))?;
    comparison.add_loan("Bank B", LoanInput::new(amount, Rate::from_percent(dec!(9.0)), Tenure::from_years(10)))?;
    comparison.add_loan("Bank C", LoanInput::new(amount, Rate::from_percentage(10), Tenure::from_years(15)))?;

    if let Err(e) = comparison.add_loan("Bank D", LoanInput::new(amount, Rate::from_percentage(7), Tenure::from_years(5))) {
        println!("{e}");
    }

    for row in comparison.results() {
        println!(
            "{:<8} emi {:>10}  interest {:>12}  total {:>12}",
            row.name,
            row.summary.emi.round_dp(2),
            row.summary.total_interest.round_dp(2),
            row.summary.total_payment.round_dp(2),
        );
    }

    let report = ComparisonReport::build(&calc, &comparison, None);
    println!("{}", report.to_json_pretty()?);

    Ok(())
}
