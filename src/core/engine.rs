use crate::core::gate::DeliveryGate;
use crate::core::{GateReport, RosterSource};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Loads a roster, validates its structure, then runs the delivery gate over it.
pub struct MailcheckEngine<S: RosterSource> {
    source: S,
    gate: DeliveryGate,
    strict: bool,
}

impl<S: RosterSource> MailcheckEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            gate: DeliveryGate::new(),
            strict: false,
        }
    }

    /// In strict mode any rejected address turns the run into an error.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn run(&self) -> Result<GateReport> {
        tracing::info!("Loading roster...");
        let roster = self.source.load()?;
        roster.validate()?;

        if let Some(exchange) = &roster.exchange {
            tracing::info!("Checking {} participant(s) for '{}'", roster.len(), exchange);
        } else {
            tracing::info!("Checking {} participant(s)", roster.len());
        }

        let report = if self.strict {
            self.gate.enforce(&roster)?
        } else {
            self.gate.check(&roster)
        };

        tracing::info!(
            "{} accepted, {} rejected",
            report.accepted().len(),
            report.rejected().len()
        );
        Ok(report)
    }
}
