//! `check_idrac` — Nagios/Icinga probe for Dell iDRAC hardware sensors.
//!
//! Opens an SSH session to the controller, captures the sensor report,
//! classifies it and prints exactly one status line on stdout:
//!
//! ```text
//! OK: [POWER] - PS1 Status : is Ok ...
//! ```
//!
//! Exit codes follow the plugin convention: 0 OK, 1 WARNING, 2 CRITICAL,
//! 3 UNKNOWN (transport failure, empty report or invalid invocation).

mod bootstrap;
mod cli;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use probe_core::category::Scope;
use probe_core::error::{ProbeError, Result};
use probe_core::severity::Severity;
use probe_report::classifier::{self, ClassifyOutcome};
use probe_report::parser::parse_report;
use probe_transport::{ReportTransport, SshTransport, SENSOR_COMMAND};

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    bootstrap::setup_logging(cli.debug);

    let transport = SshTransport::new(
        cli.host.clone(),
        cli.port,
        cli.username.clone(),
        cli.clean_password(),
        Duration::from_secs(cli.timeout),
    );

    match run(&cli, &transport) {
        Ok((severity, text)) => {
            println!("{}: {}", severity.label(), text);
            ExitCode::from(severity.exit_code())
        }
        Err(err) => {
            println!("{}: {}", Severity::Unknown.label(), err);
            ExitCode::from(Severity::Unknown.exit_code())
        }
    }
}

/// The whole pipeline after argument parsing: validate the scope, fetch the
/// report, parse, classify, detect severity.
///
/// The scope is validated before anything touches the network so an invalid
/// invocation fails fast, distinct from any hardware verdict.
fn run(cli: &cli::Cli, transport: &dyn ReportTransport) -> Result<(Severity, String)> {
    let scope: Scope = cli.sensortype.parse()?;

    let lines = transport.fetch_report(SENSOR_COMMAND)?;
    if lines.is_empty() {
        return Err(ProbeError::EmptyReport);
    }

    let inventory = parse_report(&lines);
    tracing::debug!(
        "parsed {} categories from {} report lines",
        inventory.len(),
        lines.len()
    );

    if cli.debug {
        if let Ok(dump) = serde_json::to_string_pretty(&inventory.to_debug_json()) {
            println!("{}", dump);
        }
    }

    Ok(match classifier::classify_scope(&inventory, scope, cli.perfdata) {
        ClassifyOutcome::Report(text) => (Severity::of_output(&text), text),
        ClassifyOutcome::NoData(category) => {
            (Severity::Ok, format!("{} - no data for category", category))
        }
    })
}
