/// quick start - emi and loan totals
use loan_lens_rs::{compute_summary, Money, Rate, Tenure};
use rust_decimal_macros::dec;

fn main() {
    // 1,00,000 at 8.5% for 5 years
    let summary = compute_summary(
        Money::from_major(100_000),
        Rate::from_percent(dec!(8.5)),
        Tenure::from_years(5),
    );

    println!("monthly emi:    {}", summary.emi.round_dp(2));
    println!("total interest: {}", summary.total_interest.round_dp(2));
    println!("total payment:  {}", summary.total_payment.round_dp(2));
}
