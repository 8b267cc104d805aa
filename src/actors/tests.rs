use super::{AccountActor, ActorError};
use crate::models::{Account, AccountCounter, AccountError, AccountStatus, TransactionKind};
use crate::clock::SystemClock;
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn amount(value: &str) -> Result<Decimal> {
    Ok(Decimal::from_str(value)?)
}

fn create_account(initial_balance: &str) -> Result<Account> {
    Ok(Account::with_context(1, amount(initial_balance)?, "Actor", Arc::new(SystemClock), &AccountCounter::new()))
}

#[tokio::test]
async fn test_actor_applies_operations_and_returns_account() -> Result<()> {
    let actor = AccountActor::spawn(create_account("100.0")?);
    let handle = actor.handle();

    let deposit = handle.deposit(amount("50.0")?).await?;
    let withdrawal = handle.withdraw(amount("30.0")?).await?;

    assert_eq!(deposit.kind(), TransactionKind::Deposit);
    assert_eq!(withdrawal.balance_after(), amount("120.0")?);
    assert_eq!(handle.balance().await?, amount("120.0")?);
    assert_eq!(handle.transaction_history().await?.len(), 2);

    drop(handle);
    let account = actor.despawn().await?;

    assert_eq!(account.balance(), amount("120.0")?);
    assert_eq!(account.transaction_history().len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_actor_maintains_resilience_to_business_logic_errors() -> Result<()> {
    let actor = AccountActor::spawn(create_account("10.0")?);
    let handle = actor.handle();

    // Valid -> Invalid (Insufficient Funds) -> Valid
    handle.deposit(amount("10.0")?).await?;
    let result = handle.withdraw(amount("999.0")?).await;
    handle.deposit(amount("20.0")?).await?;

    assert!(matches!(result, Err(ActorError::Account(AccountError::InsufficientFunds { .. }))));

    drop(handle);
    let account = actor.despawn().await?;

    assert_eq!(account.balance(), amount("40.0")?);

    Ok(())
}

#[tokio::test]
async fn test_actor_enforces_suspension() -> Result<()> {
    let actor = AccountActor::spawn(create_account("10.0")?);
    let handle = actor.handle();

    handle.suspend().await?;
    let result = handle.deposit(amount("5.0")?).await;

    assert!(matches!(result, Err(ActorError::Account(AccountError::AccountSuspended { .. }))));

    handle.activate().await?;
    handle.deposit(amount("5.0")?).await?;

    drop(handle);
    let account = actor.despawn().await?;

    assert_eq!(account.status(), AccountStatus::Active);
    assert_eq!(account.balance(), amount("15.0")?);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_deposits_through_cloned_handles_all_apply() -> Result<()> {
    let actor = AccountActor::spawn(create_account("0")?);
    let mut tasks = Vec::new();

    for _ in 0..50 {
        let handle = actor.handle();
        let deposit = amount("1.5")?;
        tasks.push(tokio::spawn(async move { handle.deposit(deposit).await }));
    }

    for task in tasks {
        task.await??;
    }

    let account = actor.despawn().await?;
    let history = account.transaction_history();

    assert_eq!(account.balance(), amount("75.0")?);
    assert_eq!(history.len(), 50);

    for (index, transaction) in history.iter().enumerate() {
        assert_eq!(transaction.balance_after(), amount("1.5")? * Decimal::from(index + 1));
    }

    Ok(())
}

#[tokio::test]
async fn test_despawn_waits_for_outstanding_handles() -> Result<()> {
    let actor = AccountActor::spawn(create_account("0")?);
    let handle = actor.handle();
    let despawn = tokio::spawn(actor.despawn());

    sleep(Duration::from_millis(50)).await;

    assert!(!despawn.is_finished());

    handle.deposit(amount("5.0")?).await?;
    drop(handle);

    let account = despawn.await??;

    assert_eq!(account.balance(), amount("5.0")?);

    Ok(())
}
