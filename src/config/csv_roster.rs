use crate::domain::model::{Participant, Roster};
use crate::domain::ports::RosterSource;
use crate::utils::error::Result;
use std::io::Read;
use std::path::{Path, PathBuf};

impl Roster {
    /// Reads a `name,email` CSV. Header names are trimmed; field values are kept verbatim.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let participants = csv_reader
            .deserialize::<Participant>()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

        Ok(Roster::new(participants))
    }

    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }
}

#[derive(Debug, Clone)]
pub struct CsvRosterFile {
    path: PathBuf,
}

impl CsvRosterFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterSource for CsvRosterFile {
    fn load(&self) -> Result<Roster> {
        tracing::debug!("Loading CSV roster from {}", self.path.display());
        let roster = Roster::from_csv_file(&self.path)?;
        tracing::info!(
            "Loaded {} participant(s) from {}",
            roster.len(),
            self.path.display()
        );
        Ok(roster)
    }
}
