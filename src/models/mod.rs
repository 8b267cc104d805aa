mod account;
mod counter;
mod errors;
mod transaction;

use serde::Serialize;

pub use account::Account;
pub use counter::AccountCounter;
pub use errors::AccountError;
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw
}

/// Gates whether an account accepts deposits and withdrawals.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended
}
