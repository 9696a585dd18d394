use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub email: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub exchange: Option<String>,
    pub participants: Vec<Participant>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self {
            exchange: None,
            participants,
        }
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Outcome of running the delivery gate over a roster. Both lists keep roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GateReport {
    pub(crate) accepted: Vec<Participant>,
    pub(crate) rejected: Vec<Participant>,
}

impl GateReport {
    pub fn accepted(&self) -> &[Participant] {
        &self.accepted
    }

    pub fn rejected(&self) -> &[Participant] {
        &self.rejected
    }

    pub fn is_clear(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }
}
