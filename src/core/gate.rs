use crate::domain::model::{GateReport, Participant, Roster};
use crate::utils::error::{MailcheckError, Result};
use crate::utils::validation::is_email_valid;

/// Precondition check run over every recipient before any message is sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryGate;

impl DeliveryGate {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, roster: &Roster) -> GateReport {
        self.partition(roster.participants.iter().cloned())
    }

    /// Like [`check`](Self::check), but any rejected address blocks the whole roster.
    pub fn enforce(&self, roster: &Roster) -> Result<GateReport> {
        let report = self.check(roster);
        if report.is_clear() {
            Ok(report)
        } else {
            Err(MailcheckError::GateRejectedError {
                rejected: report.rejected.iter().map(|p| p.name.clone()).collect(),
            })
        }
    }

    /// Checks bare addresses; each one is reported under its own text as name.
    pub fn check_addresses(&self, addresses: &[String]) -> GateReport {
        self.partition(
            addresses
                .iter()
                .map(|address| Participant::new(address.clone(), address.clone())),
        )
    }

    fn partition(&self, participants: impl Iterator<Item = Participant>) -> GateReport {
        let mut report = GateReport::default();
        for participant in participants {
            if is_email_valid(&participant.email) {
                tracing::debug!("Accepted address for {}", participant.name);
                report.accepted.push(participant);
            } else {
                tracing::warn!(
                    "Rejected address for {}: {:?}",
                    participant.name,
                    participant.email
                );
                report.rejected.push(participant);
            }
        }
        report
    }
}
