pub mod csv_roster;
pub mod toml_config;

use crate::domain::model::Roster;
use crate::utils::error::{MailcheckError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::collections::HashSet;
use std::path::Path;

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RosterFormat {
    Toml,
    Csv,
}

impl RosterFormat {
    /// Guesses the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Self::Csv),
            _ => Err(MailcheckError::InvalidConfigValueError {
                field: "roster".to_string(),
                value: path.display().to_string(),
                reason: "Cannot infer roster format, use a .toml or .csv file or pass --format"
                    .to_string(),
            }),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "santa-mailcheck")]
#[command(about = "Checks gift-exchange participant addresses before any mail goes out")]
pub struct CliConfig {
    /// Addresses to check directly
    pub addresses: Vec<String>,

    /// Roster file (TOML or CSV) whose participant addresses are checked
    #[arg(short, long)]
    pub roster: Option<String>,

    /// Roster format, inferred from the extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<RosterFormat>,

    /// Fail with a single error listing every rejected participant
    #[arg(long)]
    pub strict: bool,

    /// Print the gate report as JSON instead of one line per address
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn roster_format(&self) -> Result<Option<RosterFormat>> {
        match (&self.roster, self.format) {
            (None, _) => Ok(None),
            (Some(_), Some(format)) => Ok(Some(format)),
            (Some(path), None) => RosterFormat::from_path(path).map(Some),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.roster {
            crate::utils::validation::validate_path("roster", path)?;
        } else if self.addresses.is_empty() {
            return Err(MailcheckError::MissingConfigError {
                field: "addresses or --roster".to_string(),
            });
        }
        Ok(())
    }
}

impl Validate for Roster {
    fn validate(&self) -> Result<()> {
        if self.participants.is_empty() {
            return Err(MailcheckError::MissingConfigError {
                field: "participants".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for (index, participant) in self.participants.iter().enumerate() {
            let field = format!("participants[{}].name", index);
            validate_non_empty_string(&field, &participant.name)?;
            if !seen.insert(participant.name.as_str()) {
                return Err(MailcheckError::InvalidConfigValueError {
                    field,
                    value: participant.name.clone(),
                    reason: "Participant names must be unique".to_string(),
                });
            }
        }

        Ok(())
    }
}
