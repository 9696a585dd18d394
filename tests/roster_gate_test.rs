use anyhow::Result;
use santa_mailcheck::domain::ports::RosterSource;
use santa_mailcheck::{
    CsvRosterFile, DeliveryGate, MailcheckEngine, MailcheckError, Roster, TomlRosterFile,
};
use tempfile::TempDir;

const TOML_ROSTER: &str = r#"
[exchange]
name = "Family 2026"

[[participants]]
name = "Alice"
email = "alice@example.com"

[[participants]]
name = "Bob"
email = "bob@example"

[[participants]]
name = "Carol"
email = "carol.smith+gifts@mail.example.org"
"#;

#[test]
fn test_toml_roster_through_engine() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("roster.toml");
    std::fs::write(&path, TOML_ROSTER)?;

    let report = MailcheckEngine::new(TomlRosterFile::new(&path)).run()?;

    assert_eq!(report.total(), 3);
    assert_eq!(report.accepted().len(), 2);
    assert_eq!(report.rejected()[0].name, "Bob");
    Ok(())
}

#[test]
fn test_strict_engine_blocks_delivery() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("roster.toml");
    std::fs::write(&path, TOML_ROSTER)?;

    let err = MailcheckEngine::new(TomlRosterFile::new(&path))
        .strict(true)
        .run()
        .unwrap_err();

    match err {
        MailcheckError::GateRejectedError { rejected } => assert_eq!(rejected, ["Bob"]),
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn test_csv_roster_all_valid() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("roster.csv");
    std::fs::write(
        &path,
        "name,email\nAlice,alice@example.com\nBob,bob@example.co.uk\n",
    )?;

    let roster = CsvRosterFile::new(&path).load()?;
    let report = DeliveryGate::new().enforce(&roster)?;

    assert!(report.is_clear());
    assert_eq!(report.accepted().len(), 2);
    Ok(())
}

#[test]
fn test_csv_padded_address_is_rejected() -> Result<()> {
    let roster = Roster::from_csv_reader("name,email\nAlice,alice@example.com \n".as_bytes())?;
    let report = DeliveryGate::new().check(&roster);
    assert_eq!(report.rejected().len(), 1);
    Ok(())
}

#[test]
fn test_duplicate_names_fail_before_gate() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("roster.csv");
    std::fs::write(
        &path,
        "name,email\nAlice,alice@example.com\nAlice,other@example.com\n",
    )?;

    let result = MailcheckEngine::new(CsvRosterFile::new(&path)).run();
    assert!(matches!(
        result,
        Err(MailcheckError::InvalidConfigValueError { .. })
    ));
    Ok(())
}
