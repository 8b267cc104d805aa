use std::fs;
use std::process::Command;
use anyhow::Result;
use tempfile::NamedTempFile;

#[test]
fn test_cli_prints_reference_scenario() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_bank-account");

    let output = Command::new(binary_path).output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Account Number: 1001, Balance: 1,000.00 THB, Name: Somchai"));
    assert!(stdout.contains("Balance: 1,500.00 THB"));
    assert!(stdout.contains("Balance: 1,200.00 THB"));
    assert!(stdout.contains("Balance after: 1,200.00 THB"));
    assert!(stdout.contains("Deposit after suspension rejected"));
    assert!(stdout.contains("Total accounts: 1"));
    assert_eq!(stdout.matches("Type: ").count(), 2);

    Ok(())
}

#[test]
fn test_cli_writes_history_csv() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_bank-account");
    let history_file = NamedTempFile::new()?;

    let output = Command::new(binary_path)
        .arg("error")
        .arg(history_file.path())
        .output()?;

    assert!(output.status.success());

    let contents = fs::read_to_string(history_file.path())?;
    let mut lines = contents.lines();

    assert_eq!(lines.next(), Some("type,amount,timestamp,balance_after"));

    let rows: Vec<Vec<&str>> = lines.map(|line| line.split(',').collect()).collect();

    assert_eq!(rows.len(), 2);

    for row in &rows {
        assert_eq!(row.len(), 4);
    }

    assert_eq!(rows[0][0], "deposit");
    assert_eq!(rows[0][1].parse::<f64>()?, 500.0);
    assert_eq!(rows[0][3].parse::<f64>()?, 1500.0);

    assert_eq!(rows[1][0], "withdraw");
    assert_eq!(rows[1][1].parse::<f64>()?, 300.0);
    assert_eq!(rows[1][3].parse::<f64>()?, 1200.0);

    Ok(())
}
