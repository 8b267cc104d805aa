use rust_decimal::Decimal;
use thiserror::Error;
use tokio::spawn;
use tokio::sync::{mpsc, oneshot};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, warn};

use crate::models::{Account, AccountError, Transaction};
use crate::types::AccountId;

#[derive(Debug, Error)]
pub enum ActorError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("Account actor for account [{account_id}] is no longer running")]
    Closed {
        account_id: AccountId
    },
    #[error("Account actor for account [{account_id}] did not shut down cleanly: {source}")]
    Join {
        account_id: AccountId,
        source: JoinError
    }
}

type Reply<T> = oneshot::Sender<T>;

#[derive(Debug)]
enum Command {
    Deposit(Decimal, Reply<Result<Transaction, AccountError>>),
    Withdraw(Decimal, Reply<Result<Transaction, AccountError>>),
    Suspend(Reply<()>),
    Activate(Reply<()>),
    Balance(Reply<Decimal>),
    History(Reply<Vec<Transaction>>)
}

/// Owns one account on its own task, so every operation on it is applied one at a time.
pub struct AccountActor {
    handle: AccountHandle,
    task: JoinHandle<Account>
}

impl AccountActor {
    /// Moves the account onto a new task and returns the actor controlling it.
    pub fn spawn(mut account: Account) -> Self {
        let account_id = account.account_id();
        let (sender, mut receiver) = mpsc::unbounded_channel::<Command>();

        let task = spawn(async move {
            while let Some(command) = receiver.recv().await {
                match command {
                    Command::Deposit(amount, reply) => {
                        let result = account.deposit(amount);
                        log_result(account.account_id(), &result);
                        let _ = reply.send(result);
                    },
                    Command::Withdraw(amount, reply) => {
                        let result = account.withdraw(amount);
                        log_result(account.account_id(), &result);
                        let _ = reply.send(result);
                    },
                    Command::Suspend(reply) => {
                        account.suspend();
                        let _ = reply.send(());
                    },
                    Command::Activate(reply) => {
                        account.activate();
                        let _ = reply.send(());
                    },
                    Command::Balance(reply) => {
                        let _ = reply.send(account.balance());
                    },
                    Command::History(reply) => {
                        let _ = reply.send(account.transaction_history());
                    }
                }
            }

            account
        });

        Self {
            handle: AccountHandle { account_id, sender },
            task
        }
    }

    /// A cloneable handle for submitting operations from other tasks.
    pub fn handle(&self) -> AccountHandle {
        self.handle.clone()
    }

    /// Stops accepting work and hands the account back once all queued operations finish.
    ///
    /// Outstanding [`AccountHandle`] clones keep the actor alive, so they must be dropped
    /// for this to complete.
    pub async fn despawn(self) -> Result<Account, ActorError> {
        let account_id = self.handle.account_id;
        drop(self.handle);

        self.task.await.map_err(|source| ActorError::Join { account_id, source })
    }
}

#[derive(Debug, Clone)]
pub struct AccountHandle {
    account_id: AccountId,
    sender: mpsc::UnboundedSender<Command>
}

impl AccountHandle {
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub async fn deposit(&self, amount: Decimal) -> Result<Transaction, ActorError> {
        Ok(self.request(|reply| Command::Deposit(amount, reply)).await??)
    }

    pub async fn withdraw(&self, amount: Decimal) -> Result<Transaction, ActorError> {
        Ok(self.request(|reply| Command::Withdraw(amount, reply)).await??)
    }

    pub async fn suspend(&self) -> Result<(), ActorError> {
        self.request(Command::Suspend).await
    }

    pub async fn activate(&self) -> Result<(), ActorError> {
        self.request(Command::Activate).await
    }

    pub async fn balance(&self) -> Result<Decimal, ActorError> {
        self.request(Command::Balance).await
    }

    pub async fn transaction_history(&self) -> Result<Vec<Transaction>, ActorError> {
        self.request(Command::History).await
    }

    async fn request<T>(&self, command: impl FnOnce(Reply<T>) -> Command) -> Result<T, ActorError> {
        let (reply, response) = oneshot::channel();
        let closed = || ActorError::Closed { account_id: self.account_id };

        self.sender.send(command(reply)).map_err(|_| closed())?;

        response.await.map_err(|_| closed())
    }
}

fn log_result(account_id: AccountId, result: &Result<Transaction, AccountError>) {
    match result {
        Ok(transaction) => {
            debug!("[{:?}] of [{}] applied to account [{account_id}], balance now [{}]", transaction.kind(), transaction.amount(), transaction.balance_after());
        },
        Err(error) => {
            //NOTE: Business rule failures are reported back to the caller, the actor keeps running
            warn!("{error}");
        }
    }
}
