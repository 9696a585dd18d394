pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{csv_roster::CsvRosterFile, toml_config::TomlRosterFile, RosterFormat};
pub use crate::core::{engine::MailcheckEngine, gate::DeliveryGate};
pub use domain::model::{GateReport, Participant, Roster};
pub use utils::error::{MailcheckError, Result};
pub use utils::validation::{is_email_valid, validate_email};
