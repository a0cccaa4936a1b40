/// yearly amortization schedule with per-month detail
use loan_lens_rs::{EmiReport, LoanCalculator, LoanInput, Money, Rate, SafeTimeProvider, Tenure, TimeSource};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calc = LoanCalculator::default();
    let time = SafeTimeProvider::new(TimeSource::System);

    let loan = LoanInput::new(
        Money::from_major(500_000),
        Rate::from_percent(dec!(9.25)),
        Tenure::from_years(3),
    );

    let schedule = calc.schedule_for(&loan, &time);
    println!("emi {} starting {}", schedule.emi.round_dp(2), schedule.start_date);

    for year in &schedule.years {
        println!(
            "{}: principal {} interest {} balance {} ({}% paid)",
            year.label,
            year.principal_paid.round_dp(2),
            year.interest_paid.round_dp(2),
            year.balance.round_dp(2),
            year.loan_paid_to_date.round_dp(1),
        );
        for month in &year.months {
            println!(
                "    {}  principal {:>12}  interest {:>10}  balance {:>12}",
                month.label,
                month.principal_paid.round_dp(2),
                month.interest_paid.round_dp(2),
                month.balance.round_dp(2),
            );
        }
    }

    // same data as the json view a ui would consume
    let report = EmiReport::build(&calc, &loan, Some("INR"), &time);
    println!("{}", report.to_json_pretty()?);

    Ok(())
}
