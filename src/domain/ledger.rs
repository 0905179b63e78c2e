use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::{
    Cents, Clock, SystemClock, Total, Transaction, TransactionId, TransactionKind, format_cents,
};

/// Anything carrying an amount and an income/expense tag.
pub trait FinancialRecord {
    fn amount(&self) -> Cents;
    fn kind(&self) -> &TransactionKind;
}

impl FinancialRecord for Transaction {
    fn amount(&self) -> Cents {
        Transaction::amount(self)
    }

    fn kind(&self) -> &TransactionKind {
        Transaction::kind(self)
    }
}

/// Sum the amounts of all records whose kind matches exactly.
/// Records of any other kind are ignored; no matches gives 0.
pub fn total_by_kind<R: FinancialRecord>(records: &[R], kind: &TransactionKind) -> Total {
    records
        .iter()
        .filter(|record| record.kind() == kind)
        .map(|record| Total::from(record.amount()))
        .sum()
}

/// In-memory, append-only list of transactions.
///
/// Ids are handed out from a counter starting at 0, so `len() == next_id`
/// always holds.
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    /// Empty ledger stamping transactions with the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 0,
            clock,
        }
    }

    /// Record a transaction dated today. Never fails: any category and any
    /// kind text are stored as given.
    pub fn append(
        &mut self,
        amount: Cents,
        category: impl Into<String>,
        kind: impl Into<TransactionKind>,
    ) -> &Transaction {
        let id = self.next_id;
        let transaction = Transaction::new(
            id,
            amount,
            category.into(),
            self.clock.today(),
            kind.into(),
        );
        debug!(
            id,
            amount = %format_cents(amount),
            kind = %transaction.kind(),
            "appended transaction"
        );

        self.transactions.push(transaction);
        self.next_id += 1;
        &self.transactions[self.transactions.len() - 1]
    }

    /// All transactions in the order they were appended.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        // ids are dense and never reused, so the id is the index
        usize::try_from(id)
            .ok()
            .and_then(|index| self.transactions.get(index))
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Id the next appended transaction will receive.
    pub fn next_id(&self) -> TransactionId {
        self.next_id
    }

    pub fn total(&self, kind: &TransactionKind) -> Total {
        total_by_kind(&self.transactions, kind)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("transactions", &self.transactions)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
