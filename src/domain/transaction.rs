use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Cents, serde_amount};

pub type TransactionId = u64;

/// Income/expense tag of a transaction.
///
/// Text that is neither `income` nor `expense` is kept verbatim in `Other`, so
/// any input can be recorded. Two kinds are equal exactly when their text is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionKind {
    Income,
    Expense,
    Other(String),
}

impl TransactionKind {
    /// Exact, case-sensitive match: "Income" is `Other("Income")`.
    pub fn parse(s: &str) -> Self {
        match s {
            "income" => TransactionKind::Income,
            "expense" => TransactionKind::Expense,
            other => TransactionKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Other(raw) => raw,
        }
    }

    /// Returns true for `income` and `expense`.
    pub fn is_known(&self) -> bool {
        !matches!(self, TransactionKind::Other(_))
    }
}

impl PartialEq for TransactionKind {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TransactionKind {}

impl Hash for TransactionKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TransactionKind {
    fn from(s: &str) -> Self {
        TransactionKind::parse(s)
    }
}

impl From<String> for TransactionKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "income" => TransactionKind::Income,
            "expense" => TransactionKind::Expense,
            _ => TransactionKind::Other(s),
        }
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A single recorded income or expense. Immutable once the ledger creates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    /// Amount in cents; sign is the caller's convention
    #[serde(with = "serde_amount")]
    amount: Cents,
    category: String,
    /// Calendar date the transaction was recorded on
    date: NaiveDate,
    #[serde(rename = "type")]
    kind: TransactionKind,
}

impl Transaction {
    /// Only the ledger hands out ids, so construction stays crate-private.
    pub(crate) fn new(
        id: TransactionId,
        amount: Cents,
        category: String,
        date: NaiveDate,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id,
            amount,
            category,
            date,
            kind,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn amount(&self) -> Cents {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> &TransactionKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_is_exact() {
        assert_eq!(TransactionKind::parse("income"), TransactionKind::Income);
        assert_eq!(TransactionKind::parse("expense"), TransactionKind::Expense);
        assert_eq!(
            TransactionKind::parse("Income"),
            TransactionKind::Other("Income".to_string())
        );
        assert_eq!(
            TransactionKind::parse(" expense"),
            TransactionKind::Other(" expense".to_string())
        );
        assert_eq!(
            TransactionKind::parse(""),
            TransactionKind::Other(String::new())
        );
    }

    #[test]
    fn test_kind_equality_follows_text() {
        assert_eq!(
            TransactionKind::Other("income".to_string()),
            TransactionKind::Income
        );
        assert_ne!(TransactionKind::Income, TransactionKind::Expense);
        assert_ne!(
            TransactionKind::Other("INCOME".to_string()),
            TransactionKind::Income
        );
    }

    #[test]
    fn test_kind_round_trips_through_text() {
        for raw in ["income", "expense", "refund", ""] {
            let kind = TransactionKind::from(raw.to_string());
            assert_eq!(kind.as_str(), raw);
            assert_eq!(String::from(kind), raw);
        }
        assert!(TransactionKind::Income.is_known());
        assert!(!TransactionKind::parse("transfer").is_known());
    }

    #[test]
    fn test_transaction_serializes_amount_as_decimal_string() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let tx = Transaction::new(7, 4050, "Groceries".into(), date, TransactionKind::Expense);

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["amount"], "40.50");
        assert_eq!(json["category"], "Groceries");
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["type"], "expense");

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, tx);
    }
}
