use crate::models::TransactionKind;
use crate::types::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account [{account_id}] is suspended, [{transaction_kind:?}] of [{amount}] rejected")]
    AccountSuspended {
        account_id: AccountId,
        transaction_kind: TransactionKind,
        amount: Decimal
    },
    #[error("Amount [{amount}] must be greater than zero for [{transaction_kind:?}] on account [{account_id}]")]
    InvalidAmount {
        account_id: AccountId,
        transaction_kind: TransactionKind,
        amount: Decimal
    },
    #[error("Insufficient funds on account [{account_id}]: requested [{amount}], available [{balance}]")]
    InsufficientFunds {
        account_id: AccountId,
        amount: Decimal,
        balance: Decimal
    },
    #[error("Initial balance [{amount}] must not be negative for account [{account_id}]")]
    NegativeInitialBalance {
        account_id: AccountId,
        amount: Decimal
    },
    #[error("Numeric overflow occurred for [{transaction_kind:?}] of [{amount}] on account [{account_id}]")]
    Overflow {
        account_id: AccountId,
        transaction_kind: TransactionKind,
        amount: Decimal
    }
}

impl AccountError {
    pub fn account_suspended(account_id: AccountId, transaction_kind: TransactionKind, amount: Decimal) -> Self {
        Self::AccountSuspended { account_id, transaction_kind, amount }
    }

    pub fn invalid_amount(account_id: AccountId, transaction_kind: TransactionKind, amount: Decimal) -> Self {
        Self::InvalidAmount { account_id, transaction_kind, amount }
    }

    pub fn insufficient_funds(account_id: AccountId, amount: Decimal, balance: Decimal) -> Self {
        Self::InsufficientFunds { account_id, amount, balance }
    }

    pub fn negative_initial_balance(account_id: AccountId, amount: Decimal) -> Self {
        Self::NegativeInitialBalance { account_id, amount }
    }

    pub fn overflow(account_id: AccountId, transaction_kind: TransactionKind, amount: Decimal) -> Self {
        Self::Overflow { account_id, transaction_kind, amount }
    }
}
