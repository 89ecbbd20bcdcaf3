//! Remote session layer for the iDRAC sensor probe.
//!
//! Owns the only blocking operation in the probe: opening an SSH session to
//! the management controller and capturing the output of the sensor report
//! command. The binary depends on the [`ReportTransport`] trait rather than
//! the concrete [`SshTransport`] so tests can substitute a canned report.

mod ssh;

pub use ssh::SshTransport;

use probe_core::error::Result;

/// The command executed on the controller to obtain the sensor report.
pub const SENSOR_COMMAND: &str = "racadm getsensorinfo";

/// A source of raw sensor-report lines.
pub trait ReportTransport {
    /// Run `command` in a remote shell on the controller and return its
    /// captured standard output split into lines.
    ///
    /// # Errors
    ///
    /// Returns [`probe_core::error::ProbeError::Transport`] when the session
    /// cannot be established or the command cannot be run.
    fn fetch_report(&self, command: &str) -> Result<Vec<String>>;
}
