/// impact of a fixed monthly prepayment
use loan_lens_rs::{LoanCalculator, LoanError, LoanInput, Money, Rate, Tenure};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calc = LoanCalculator::default();

    let loan = LoanInput::new(
        Money::from_major(200_000),
        Rate::from_percent(dec!(9.5)),
        Tenure::from_years(20),
    );

    let result = calc.prepayment(&loan, Money::from_major(1000))?;
    println!("interest saved:  {}", result.interest_saved.round_dp(2));
    println!("months saved:    {}", result.tenure_reduced_months);
    println!("new tenure:      {} years", result.new_tenure_years);

    for snapshot in &result.amortization_data {
        println!(
            "year {:>2}: with {:>12}  without {:>12}",
            snapshot.year,
            snapshot.balance_with_prepayment.round_dp(2),
            snapshot.balance_without_prepayment.round_dp(2),
        );
    }

    // a zero-rate loan with no prepayment never pays down
    let stuck = LoanInput::new(Money::from_major(10_000), Rate::ZERO, Tenure::from_years(2));
    match calc.prepayment(&stuck, Money::ZERO) {
        Err(LoanError::PayoffNotReached { ceiling_months, .. }) => {
            println!("no payoff within {ceiling_months} months");
        }
        other => println!("unexpected: {other:?}"),
    }

    Ok(())
}
