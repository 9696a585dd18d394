pub mod engine;
pub mod gate;

pub use crate::domain::model::{GateReport, Participant, Roster};
pub use crate::domain::ports::RosterSource;
pub use crate::utils::error::Result;
