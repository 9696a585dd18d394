use crate::domain::model::{Participant, Roster};
use crate::domain::ports::RosterSource;
use crate::utils::error::{MailcheckError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

static ENV_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env placeholder pattern is a valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlRoster {
    pub exchange: Option<ExchangeConfig>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    pub name: String,
    pub description: Option<String>,
}

impl TomlRoster {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MailcheckError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` placeholders with environment values. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn into_roster(self) -> Roster {
        Roster {
            exchange: self.exchange.map(|e| e.name),
            participants: self.participants,
        }
    }
}

impl Roster {
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        TomlRoster::from_file(path).map(TomlRoster::into_roster)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        TomlRoster::from_toml_str(content).map(TomlRoster::into_roster)
    }
}

#[derive(Debug, Clone)]
pub struct TomlRosterFile {
    path: PathBuf,
}

impl TomlRosterFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterSource for TomlRosterFile {
    fn load(&self) -> Result<Roster> {
        tracing::debug!("Loading TOML roster from {}", self.path.display());
        let roster = Roster::from_toml_file(&self.path)?;
        tracing::info!(
            "Loaded {} participant(s) from {}",
            roster.len(),
            self.path.display()
        );
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_roster() {
        let toml_content = r#"
[exchange]
name = "Office 2026"
description = "Budget 20 EUR"

[[participants]]
name = "Alice"
email = "alice@example.com"

[[participants]]
name = "Bob"
email = "bob@example.org"
"#;

        let roster = Roster::from_toml_str(toml_content).unwrap();

        assert_eq!(roster.exchange.as_deref(), Some("Office 2026"));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.participants[1], Participant::new("Bob", "bob@example.org"));
    }

    #[test]
    fn test_roster_without_exchange_section() {
        let roster = Roster::from_toml_str(
            r#"
[[participants]]
name = "Alice"
email = "alice@example.com"
"#,
        )
        .unwrap();
        assert_eq!(roster.exchange, None);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SANTA_TEST_ALICE_EMAIL", "alice@corp.example.com");

        let toml_content = r#"
[[participants]]
name = "Alice"
email = "${SANTA_TEST_ALICE_EMAIL}"

[[participants]]
name = "Bob"
email = "${SANTA_TEST_UNSET_VARIABLE}"
"#;

        let roster = Roster::from_toml_str(toml_content).unwrap();
        assert_eq!(roster.participants[0].email, "alice@corp.example.com");
        assert_eq!(roster.participants[1].email, "${SANTA_TEST_UNSET_VARIABLE}");

        std::env::remove_var("SANTA_TEST_ALICE_EMAIL");
    }

    #[test]
    fn test_missing_email_is_parse_error() {
        let result = Roster::from_toml_str(
            r#"
[[participants]]
name = "Alice"
"#,
        );
        assert!(matches!(result, Err(MailcheckError::TomlError(_))));
    }

    #[test]
    fn test_roster_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[participants]]\nname = \"Carol\"\nemail = \"carol@example.net\"\n")
            .unwrap();

        let roster = TomlRosterFile::new(temp_file.path()).load().unwrap();
        assert_eq!(roster.participants[0].name, "Carol");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlRosterFile::new("/definitely/not/here.toml").load();
        assert!(matches!(result, Err(MailcheckError::IoError(_))));
    }
}
