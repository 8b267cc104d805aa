use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;

use anyhow::Result;
use bank_account::types::{format_currency, CURRENCY_SUFFIX};
use bank_account::{Account, AccountActor, ActorError, Transaction};
use rust_decimal::Decimal;
use tracing::{error, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: Two optional positional arguments do not warrant the clap crate
    let args: Vec<String> = std::env::args().collect();

    if args.iter().skip(1).any(|arg| arg == "-h" || arg == "--help") {
        eprintln!("Usage: bank-account [log_level:optional] [history_output].csv:optional");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let log_level = args.get(1)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);
    let history_path = args.get(2);

    setup_logging(log_level);

    let account = run_demonstration().await?;

    if let Some(path) = history_path {
        write_history_csv(path, &account.transaction_history())?;
        info!("Transaction history written to [{path}]");
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn money(amount: Decimal) -> String {
    format!("{} {}", format_currency(amount), CURRENCY_SUFFIX)
}

/// Opens an account, runs it through deposit, withdrawal and suspension, and prints each step.
async fn run_demonstration() -> Result<Account> {
    let mut output = BufWriter::new(stdout().lock());

    let account = Account::new(1001, Decimal::from(1000), "Somchai");

    writeln!(output, "=== Initial account ===")?;
    writeln!(output, "{account}")?;

    let actor = AccountActor::spawn(account);
    let handle = actor.handle();

    let deposit = Decimal::from(500);
    handle.deposit(deposit).await?;
    writeln!(output, "\n=== After depositing {} ===", money(deposit))?;
    writeln!(output, "Balance: {}", money(handle.balance().await?))?;

    let withdrawal = Decimal::from(300);
    handle.withdraw(withdrawal).await?;
    writeln!(output, "\n=== After withdrawing {} ===", money(withdrawal))?;
    writeln!(output, "Balance: {}", money(handle.balance().await?))?;

    writeln!(output, "\n=== Transaction history ===")?;

    for transaction in handle.transaction_history().await? {
        writeln!(output, "Type: {:?}", transaction.kind())?;
        writeln!(output, "Amount: {}", money(transaction.amount()))?;
        writeln!(output, "Time: {}", transaction.timestamp())?;
        writeln!(output, "Balance after: {}", money(transaction.balance_after()))?;
        writeln!(output, "{}", "-".repeat(30))?;
    }

    writeln!(output, "\n=== Suspension check ===")?;
    handle.suspend().await?;

    match handle.deposit(Decimal::from(100)).await {
        Ok(_) => {
            error!("Deposit was accepted by a suspended account");
            writeln!(output, "Deposit after suspension was unexpectedly accepted")?;
        },
        Err(ActorError::Account(error)) => {
            writeln!(output, "Deposit after suspension rejected: {error}")?;
        },
        Err(error) => return Err(error.into())
    }

    drop(handle);
    let account = actor.despawn().await?;

    writeln!(output, "Balance: {}", money(account.balance()))?;
    writeln!(output, "\nTotal accounts: {}", Account::total_accounts())?;

    output.flush()?;

    Ok(account)
}

fn write_history_csv(path: &str, history: &[Transaction]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for transaction in history {
        writer.serialize(transaction)?;
    }

    writer.flush()?;

    Ok(())
}
