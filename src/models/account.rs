use crate::clock::{Clock, SystemClock};
use crate::models::errors::AccountError;
use crate::models::{AccountCounter, AccountStatus, Transaction, TransactionKind};
use crate::types::{format_currency, AccountId, CURRENCY_SUFFIX};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tracing::{debug, warn};

/// A single bank account.
///
/// Every field is private: the balance only moves through [`Account::deposit`] and
/// [`Account::withdraw`], the status only through [`Account::suspend`] and
/// [`Account::activate`], and each successful balance change appends exactly one
/// [`Transaction`] to the history.
#[derive(Debug)]
pub struct Account {
    account_id: AccountId,
    owner_name: String,
    balance: Decimal,
    status: AccountStatus,
    created_at: DateTime<Utc>,
    history: Vec<Transaction>,
    clock: Arc<dyn Clock>
}

impl Account {
    /// Opens an account against the system clock and the process-wide counter.
    ///
    /// The initial balance is accepted as given, negative values included; a negative
    /// opening balance is logged as a warning. Use [`Account::try_new`] to reject it.
    pub fn new(account_id: AccountId, initial_balance: Decimal, owner_name: impl Into<String>) -> Self {
        Self::with_context(account_id, initial_balance, owner_name, Arc::new(SystemClock), AccountCounter::global())
    }

    /// Like [`Account::new`], but refuses a negative opening balance.
    ///
    /// # Errors
    /// Returns `AccountError::NegativeInitialBalance` without counting the account.
    pub fn try_new(account_id: AccountId, initial_balance: Decimal, owner_name: impl Into<String>) -> Result<Self, AccountError> {
        if initial_balance.is_sign_negative() && !initial_balance.is_zero() {
            return Err(AccountError::negative_initial_balance(account_id, initial_balance))
        }

        Ok(Self::new(account_id, initial_balance, owner_name))
    }

    /// Opens an account with an explicit time source and creation counter.
    pub fn with_context(
        account_id: AccountId,
        initial_balance: Decimal,
        owner_name: impl Into<String>,
        clock: Arc<dyn Clock>,
        counter: &AccountCounter
    ) -> Self {
        let owner_name = owner_name.into();

        if initial_balance.is_sign_negative() && !initial_balance.is_zero() {
            warn!("Account [{account_id}] opened with negative initial balance [{initial_balance}]");
        }

        let total = counter.record_creation();
        debug!("Account [{account_id}] opened for [{owner_name}], accounts created: {total}");

        Self {
            account_id,
            owner_name,
            balance: initial_balance,
            status: AccountStatus::Active,
            created_at: clock.now(),
            history: Vec::new(),
            clock
        }
    }

    /// Number of accounts constructed in this process through [`Account::new`] or
    /// [`Account::try_new`].
    pub fn total_accounts() -> usize {
        AccountCounter::global().count()
    }

    /// Adds funds and records a deposit.
    ///
    /// # Errors
    /// Checked in order, first failure wins, and nothing changes on failure:
    /// - `AccountSuspended` if the account is suspended.
    /// - `InvalidAmount` if `amount <= 0`.
    /// - `Overflow` if the new balance cannot be represented.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Transaction, AccountError> {
        self.check_can_transact(TransactionKind::Deposit, amount)?;

        let balance = self.balance.checked_add(amount)
            .ok_or_else(|| AccountError::overflow(self.account_id, TransactionKind::Deposit, amount))?;

        Ok(self.record(TransactionKind::Deposit, amount, balance))
    }

    /// Removes funds and records a withdrawal.
    ///
    /// # Errors
    /// Checked in order, first failure wins, and nothing changes on failure:
    /// - `AccountSuspended` if the account is suspended.
    /// - `InvalidAmount` if `amount <= 0`.
    /// - `InsufficientFunds` if `amount` exceeds the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Transaction, AccountError> {
        self.check_can_transact(TransactionKind::Withdraw, amount)?;

        if self.balance < amount {
            return Err(AccountError::insufficient_funds(self.account_id, amount, self.balance))
        }

        let balance = self.balance.checked_sub(amount)
            .ok_or_else(|| AccountError::overflow(self.account_id, TransactionKind::Withdraw, amount))?;

        Ok(self.record(TransactionKind::Withdraw, amount, balance))
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns a copy of the full log in the order operations were applied.
    pub fn transaction_history(&self) -> Vec<Transaction> {
        self.history.clone()
    }

    pub fn suspend(&mut self) {
        if self.status != AccountStatus::Suspended {
            debug!("Account [{}] suspended", self.account_id);
        }

        self.status = AccountStatus::Suspended;
    }

    pub fn activate(&mut self) {
        if self.status != AccountStatus::Active {
            debug!("Account [{}] activated", self.account_id);
        }

        self.status = AccountStatus::Active;
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn check_can_transact(&self, transaction_kind: TransactionKind, amount: Decimal) -> Result<(), AccountError> {
        if !self.is_active() {
            return Err(AccountError::account_suspended(self.account_id, transaction_kind, amount))
        }

        if amount <= Decimal::ZERO {
            return Err(AccountError::invalid_amount(self.account_id, transaction_kind, amount))
        }

        Ok(())
    }

    fn record(&mut self, transaction_kind: TransactionKind, amount: Decimal, balance: Decimal) -> Transaction {
        let transaction = Transaction::new(transaction_kind, amount, self.clock.now(), balance);

        self.balance = balance;
        self.history.push(transaction);

        transaction
    }
}

impl Display for Account {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Account Number: {}, Balance: {} {}, Name: {}",
            self.account_id,
            format_currency(self.balance),
            CURRENCY_SUFFIX,
            self.owner_name
        )
    }
}
