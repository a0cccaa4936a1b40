use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{LoanError, Result};
use crate::payments::emi::{compute_summary, LoanSummary};
use crate::types::{ComparisonId, LoanInput};

/// named loan option inside a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonLoan {
    pub id: ComparisonId,
    pub name: String,
    pub input: LoanInput,
}

/// computed totals for one loan option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub id: ComparisonId,
    pub name: String,
    pub summary: LoanSummary,
}

/// side-by-side comparison of a bounded number of loan options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanComparison {
    max_loans: usize,
    loans: Vec<ComparisonLoan>,
}

impl LoanComparison {
    pub fn new(max_loans: usize) -> Self {
        Self {
            max_loans,
            loans: Vec::new(),
        }
    }

    pub fn max_loans(&self) -> usize {
        self.max_loans
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.loans.len() >= self.max_loans
    }

    pub fn loans(&self) -> &[ComparisonLoan] {
        &self.loans
    }

    pub fn get(&self, id: ComparisonId) -> Option<&ComparisonLoan> {
        self.loans.iter().find(|l| l.id == id)
    }

    pub fn add_loan(&mut self, name: impl Into<String>, input: LoanInput) -> Result<ComparisonId> {
        if self.is_full() {
            return Err(LoanError::ComparisonFull {
                limit: self.max_loans,
            });
        }

        let id = Uuid::new_v4();
        self.loans.push(ComparisonLoan {
            id,
            name: name.into(),
            input,
        });
        Ok(id)
    }

    /// remove a loan; the last remaining loan cannot be removed
    pub fn remove_loan(&mut self, id: ComparisonId) -> Result<()> {
        let index = self.position(id)?;
        if self.loans.len() == 1 {
            return Err(LoanError::LastComparisonLoan);
        }
        self.loans.remove(index);
        Ok(())
    }

    pub fn rename_loan(&mut self, id: ComparisonId, name: impl Into<String>) -> Result<()> {
        let index = self.position(id)?;
        self.loans[index].name = name.into();
        Ok(())
    }

    pub fn update_loan(&mut self, id: ComparisonId, input: LoanInput) -> Result<()> {
        let index = self.position(id)?;
        self.loans[index].input = input;
        Ok(())
    }

    /// summaries in insertion order
    pub fn results(&self) -> Vec<ComparisonRow> {
        self.loans
            .iter()
            .map(|loan| ComparisonRow {
                id: loan.id,
                name: loan.name.clone(),
                summary: compute_summary(
                    loan.input.principal,
                    loan.input.annual_rate,
                    loan.input.tenure,
                ),
            })
            .collect()
    }

    /// lowest total payment among non-degenerate loans, earliest wins ties
    pub fn cheapest(&self) -> Option<ComparisonRow> {
        self.results()
            .into_iter()
            .filter(|row| !row.summary.is_zero())
            .fold(None, |best: Option<ComparisonRow>, row| match best {
                Some(b) if b.summary.total_payment <= row.summary.total_payment => Some(b),
                _ => Some(row),
            })
    }

    fn position(&self, id: ComparisonId) -> Result<usize> {
        self.loans
            .iter()
            .position(|l| l.id == id)
            .ok_or(LoanError::LoanNotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use crate::types::Tenure;
    use rust_decimal_macros::dec;

    fn loan(rate: rust_decimal::Decimal, years: u32) -> LoanInput {
        LoanInput::new(
            Money::from_major(100_000),
            Rate::from_percent(rate),
            Tenure::from_years(years),
        )
    }

    #[test]
    fn test_results_follow_insertion_order() {
        let mut comparison = LoanComparison::new(5);
        let first = comparison.add_loan("Loan 1", loan(dec!(8.5), 10)).unwrap();
        let second = comparison.add_loan("Loan 2", loan(dec!(9.0), 10)).unwrap();

        let rows = comparison.results();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, first);
        assert_eq!(rows[1].id, second);
        assert!(rows[0].summary.total_payment < rows[1].summary.total_payment);
    }

    #[test]
    fn test_limit_is_enforced() {
        let mut comparison = LoanComparison::new(2);
        comparison.add_loan("a", loan(dec!(8), 5)).unwrap();
        comparison.add_loan("b", loan(dec!(9), 5)).unwrap();
        assert!(comparison.is_full());

        assert!(matches!(
            comparison.add_loan("c", loan(dec!(10), 5)),
            Err(LoanError::ComparisonFull { limit: 2 })
        ));
    }

    #[test]
    fn test_last_loan_cannot_be_removed() {
        let mut comparison = LoanComparison::new(5);
        let a = comparison.add_loan("a", loan(dec!(8), 5)).unwrap();
        let b = comparison.add_loan("b", loan(dec!(9), 5)).unwrap();

        comparison.remove_loan(a).unwrap();
        assert_eq!(comparison.len(), 1);
        assert!(comparison.get(a).is_none());

        assert!(matches!(
            comparison.remove_loan(b),
            Err(LoanError::LastComparisonLoan)
        ));
        assert!(matches!(
            comparison.remove_loan(a),
            Err(LoanError::LoanNotFound { .. })
        ));
    }

    #[test]
    fn test_rename_and_update() {
        let mut comparison = LoanComparison::new(5);
        let id = comparison.add_loan("Loan 1", loan(dec!(8), 5)).unwrap();

        comparison.rename_loan(id, "Home loan").unwrap();
        comparison.update_loan(id, loan(dec!(7), 20)).unwrap();

        let stored = comparison.get(id).unwrap();
        assert_eq!(stored.name, "Home loan");
        assert_eq!(stored.input.tenure, Tenure::from_years(20));
        assert!(comparison.update_loan(Uuid::new_v4(), loan(dec!(7), 20)).is_err());
    }

    #[test]
    fn test_cheapest_skips_degenerate_loans() {
        let mut comparison = LoanComparison::new(5);
        comparison
            .add_loan("empty", LoanInput::new(Money::ZERO, Rate::from_percentage(8), Tenure::from_years(5)))
            .unwrap();
        comparison.add_loan("long", loan(dec!(8), 20)).unwrap();
        let short = comparison.add_loan("short", loan(dec!(8), 5)).unwrap();

        assert_eq!(comparison.cheapest().unwrap().id, short);
    }

    #[test]
    fn test_cheapest_of_empty_comparison() {
        assert!(LoanComparison::new(5).cheapest().is_none());
    }
}
