use chrono::Utc;

use crate::Amount;
use crate::model::{Direction, EntryId, LedgerEntry, OrderId, UserId};

/// A user wallet: the current balance plus the append-only ledger behind it.
///
/// Balance and ledger only move together, through `credit` and `debit`, so
/// the balance always equals the sum of credits minus debits.
#[derive(Debug)]
pub struct Wallet {
    user: UserId,
    balance: Amount,
    entries: Vec<LedgerEntry>,
}

impl Wallet {
    /// Create a wallet with zero balance and an empty ledger.
    pub fn new(user: UserId) -> Self {
        Self {
            user,
            balance: Amount::default(),
            entries: Vec::new(),
        }
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Ledger entries in creation order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn debit_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.direction == Direction::Debit)
            .count()
    }

    pub fn credit_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.direction == Direction::Credit)
            .count()
    }

    /// Amount of the debit entry paying for `order`, if one exists.
    pub fn debit_for(&self, order: OrderId) -> Option<Amount> {
        self.entries
            .iter()
            .find(|e| e.direction == Direction::Debit && e.order == Some(order))
            .map(|e| e.amount)
    }

    pub(crate) fn credit(
        &mut self,
        id: EntryId,
        amount: Amount,
        reason: &str,
        order: Option<OrderId>,
    ) {
        self.balance += amount;
        self.entries.push(LedgerEntry {
            id,
            direction: Direction::Credit,
            amount,
            reason: reason.to_string(),
            order,
            created_at: Utc::now(),
        });
    }

    pub(crate) fn debit(
        &mut self,
        id: EntryId,
        amount: Amount,
        reason: &str,
        order: Option<OrderId>,
    ) {
        self.balance -= amount;
        self.entries.push(LedgerEntry {
            id,
            direction: Direction::Debit,
            amount,
            reason: reason.to_string(),
            order,
            created_at: Utc::now(),
        });
    }
}
