use clap::Parser;

/// Nagios/Icinga check for Dell iDRAC hardware sensors.
///
/// Connects to the controller over SSH, runs `racadm getsensorinfo` and
/// reduces the report to a single status line and exit code.
#[derive(Parser, Debug, Clone)]
#[command(name = "check_idrac", about = "Check Dell iDRAC sensors over SSH", version)]
pub struct Cli {
    /// iDRAC hostname or address
    #[arg(short = 'H', long)]
    pub host: String,

    /// SSH port
    #[arg(short = 'P', long, default_value_t = 22)]
    pub port: u16,

    /// SSH username
    #[arg(short = 'u', long)]
    pub username: String,

    /// SSH password
    #[arg(short = 'p', long)]
    pub password: String,

    /// Sensor type to check, or "all"
    #[arg(short = 's', long, default_value = "all")]
    pub sensortype: String,

    /// Session timeout in seconds
    #[arg(short = 't', long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=300))]
    pub timeout: u64,

    /// Append a perfdata section to single-category output
    #[arg(short = 'f', long)]
    pub perfdata: bool,

    /// Dump the parsed inventory as JSON and enable debug logging
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    /// The password as handed to the SSH session.
    ///
    /// Nagios command definitions routinely wrap the secret in single
    /// quotes and backslash-escape shell metacharacters; both wrappers are
    /// undone here so the controller sees the bare secret.
    pub fn clean_password(&self) -> String {
        self.password.trim_matches('\'').replace('\\', "")
    }
}
