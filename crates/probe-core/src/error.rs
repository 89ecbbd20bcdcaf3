use thiserror::Error;

/// All errors produced by the iDRAC probe.
///
/// Every variant maps to the Nagios UNKNOWN status at the binary level;
/// hardware trouble is never an error, it is a verdict.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The requested sensor type is not one of the recognised categories.
    #[error("invalid sensortype \"{0}\", expected a sensor category or \"all\"")]
    UnknownScope(String),

    /// The SSH session to the controller could not be established or used.
    #[error("unable to run {command} by SSH: {detail}")]
    Transport { command: String, detail: String },

    /// The remote command produced no output at all.
    #[error("no response from iDRAC")]
    EmptyReport,

    /// Pass-through for raw I/O errors that do not carry session context.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the probe crates.
pub type Result<T> = std::result::Result<T, ProbeError>;
