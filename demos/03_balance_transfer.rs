/// refinance an outstanding loan at a lower rate with a processing fee
use loan_lens_rs::{BalanceTransferOffer, BalanceTransferReport, LoanCalculator, LoanInput, Money, Rate, Tenure};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calc = LoanCalculator::default();

    let current = LoanInput::new(
        Money::from_major(50_000),
        Rate::from_percentage(12),
        Tenure::from_years(3),
    );
    let offer = BalanceTransferOffer::new(Rate::from_percentage(9), Tenure::from_years(3), dec!(1));

    let result = calc.balance_transfer(&current, &offer);
    println!("current total:   {}", result.current_summary.total_payment.round_dp(2));
    println!("new total (fee): {}", result.new_summary.total_payment.round_dp(2));
    println!("emi change:      {}", result.emi_difference().round_dp(2));

    if result.is_beneficial() {
        println!("transfer saves {}", result.total_savings.round_dp(2));
    } else {
        println!("transfer costs {}", result.total_savings.abs().round_dp(2));
    }

    let report = BalanceTransferReport::build(&calc, &current, &offer, Some("USD"));
    println!("{}", report.to_json_pretty()?);

    Ok(())
}
