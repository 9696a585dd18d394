use crate::domain::model::Roster;
use crate::utils::error::Result;

/// Anything that can produce a participant roster (TOML file, CSV file, ...).
pub trait RosterSource {
    fn load(&self) -> Result<Roster>;
}
