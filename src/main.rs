use anyhow::Context;
use clap::Parser;
use santa_mailcheck::utils::{logger, validation::Validate};
use santa_mailcheck::{
    CliConfig, CsvRosterFile, DeliveryGate, GateReport, MailcheckEngine, MailcheckError,
    RosterFormat, TomlRosterFile,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting santa-mailcheck");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    match run(&config) {
        Ok(reports) => {
            let clear = reports.iter().all(GateReport::is_clear);
            if config.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    print_report(report);
                }
            }
            if clear {
                tracing::info!("✅ All addresses passed the delivery gate");
            } else {
                eprintln!("❌ Some addresses were rejected, fix them before sending");
                std::process::exit(2);
            }
        }
        Err(e) => {
            let Some(mailcheck_error) = e.downcast_ref::<MailcheckError>() else {
                return Err(e);
            };

            tracing::error!(
                "❌ Check failed: {:#} (Category: {:?}, Severity: {:?})",
                e,
                mailcheck_error.category(),
                mailcheck_error.severity()
            );
            eprintln!("❌ {}", mailcheck_error.user_friendly_message());
            eprintln!("💡 Suggestion: {}", mailcheck_error.recovery_suggestion());

            std::process::exit(mailcheck_error.exit_code());
        }
    }

    Ok(())
}

fn run(config: &CliConfig) -> anyhow::Result<Vec<GateReport>> {
    let mut reports = Vec::new();

    if !config.addresses.is_empty() {
        let report = DeliveryGate::new().check_addresses(&config.addresses);
        if config.strict && !report.is_clear() {
            return Err(MailcheckError::GateRejectedError {
                rejected: report.rejected().iter().map(|p| p.name.clone()).collect(),
            }
            .into());
        }
        reports.push(report);
    }

    if let (Some(path), Some(format)) = (&config.roster, config.roster_format()?) {
        let report = match format {
            RosterFormat::Toml => MailcheckEngine::new(TomlRosterFile::new(path))
                .strict(config.strict)
                .run(),
            RosterFormat::Csv => MailcheckEngine::new(CsvRosterFile::new(path))
                .strict(config.strict)
                .run(),
        }
        .with_context(|| format!("checking roster '{}'", path))?;
        reports.push(report);
    }

    Ok(reports)
}

fn print_report(report: &GateReport) {
    for participant in report.accepted() {
        print_line("✅ valid  ", &participant.name, &participant.email);
    }
    for participant in report.rejected() {
        print_line("❌ invalid", &participant.name, &participant.email);
    }
}

fn print_line(status: &str, name: &str, email: &str) {
    if name == email {
        println!("{} {:?}", status, email);
    } else {
        println!("{} {} {:?}", status, name, email);
    }
}
