use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::TransactionKind;

/// An immutable record of one successful deposit or withdrawal.
///
/// Only [`Account`](crate::models::Account) creates these; callers receive copies and
/// cannot alter the account's own log through them. Serializes as a CSV row of
/// `type,amount,timestamp,balance_after`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Transaction {
    /// Whether funds came in or went out.
    #[serde(rename = "type")]
    kind: TransactionKind,
    /// The (always positive) amount moved.
    amount: Decimal,
    /// When the operation was applied.
    timestamp: DateTime<Utc>,
    /// Account balance immediately after the operation.
    balance_after: Decimal
}

impl Transaction {
    pub(crate) fn new(kind: TransactionKind, amount: Decimal, timestamp: DateTime<Utc>, balance_after: Decimal) -> Self {
        Self {
            kind,
            amount,
            timestamp,
            balance_after
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn balance_after(&self) -> Decimal {
        self.balance_after
    }
}
