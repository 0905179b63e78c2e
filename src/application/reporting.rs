use serde::{Deserialize, Serialize};

use crate::domain::{Ledger, Total, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeExpenseSummary {
    pub transaction_count: usize,
    pub total_income: Total,
    pub total_expense: Total,
    /// Income minus expense, taking amounts as recorded
    pub net: Total,
}

impl IncomeExpenseSummary {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let total_income = ledger.total(&TransactionKind::Income);
        let total_expense = ledger.total(&TransactionKind::Expense);
        Self {
            transaction_count: ledger.len(),
            total_income,
            total_expense,
            net: total_income - total_expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::FixedClock;

    #[test]
    fn test_summary_of_mixed_ledger() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let mut ledger = Ledger::with_clock(Arc::new(FixedClock::on(date)));
        ledger.append(10000, "Salary", "income");
        ledger.append(4050, "Groceries", "expense");
        ledger.append(700, "Lunch", "lunch");

        let summary = IncomeExpenseSummary::from_ledger(&ledger);
        assert_eq!(summary.transaction_count, 3);
        assert_eq!(summary.total_income, 10000);
        assert_eq!(summary.total_expense, 4050);
        assert_eq!(summary.net, 5950);
    }

    #[test]
    fn test_summary_net_of_near_max_amounts() {
        let mut ledger = Ledger::new();
        ledger.append(i64::MAX, "Jackpot", "income");
        ledger.append(i64::MAX, "Jackpot", "income");
        ledger.append(i64::MIN, "Clawback", "expense");

        let summary = IncomeExpenseSummary::from_ledger(&ledger);
        assert_eq!(summary.total_income, Total::from(i64::MAX) * 2);
        assert_eq!(summary.total_expense, Total::from(i64::MIN));
        assert_eq!(
            summary.net,
            Total::from(i64::MAX) * 2 - Total::from(i64::MIN)
        );
    }

    #[test]
    fn test_summary_of_empty_ledger() {
        let summary = IncomeExpenseSummary::from_ledger(&Ledger::new());
        assert_eq!(
            summary,
            IncomeExpenseSummary {
                transaction_count: 0,
                total_income: 0,
                total_expense: 0,
                net: 0,
            }
        );
    }
}
