pub mod amortization;
pub mod emi;
pub mod prepayment;

pub use amortization::{
    generate_schedule, AmortizationSchedule, MonthlyAmortization, YearlyAmortization,
};
pub use emi::{compute_emi, compute_summary, LoanSummary, PaymentBreakdown};
pub use prepayment::{simulate_prepayment, PrepaymentResult, PrepaymentSimulator, PrepaymentSnapshot};
