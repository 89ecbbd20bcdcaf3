use std::io::Read;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use probe_core::error::{ProbeError, Result};
use ssh2::Session;
use tracing::debug;

use crate::ReportTransport;

/// Password-authenticated SSH session to an iDRAC controller.
///
/// Single-shot: each [`ReportTransport::fetch_report`] call opens a fresh
/// session, runs one command and tears everything down. iDRAC firmwares
/// are picky about long-lived shells, and the probe has exactly one command
/// to run anyway.
#[derive(Debug, Clone)]
pub struct SshTransport {
    host: String,
    port: u16,
    username: String,
    password: String,
    timeout: Duration,
}

impl SshTransport {
    /// A transport for the given controller endpoint and credentials.
    /// `timeout` bounds the TCP connect and every subsequent SSH operation.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        SshTransport {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
            timeout,
        }
    }

    /// Resolve the endpoint and connect with the configured timeout,
    /// trying each resolved address in turn.
    fn connect(&self, command: &str) -> Result<TcpStream> {
        let addrs = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| {
                transport_err(command, format!("cannot resolve {}: {}", self.host, e))
            })?;

        let mut last_error: Option<std::io::Error> = None;
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(stream) => {
                    debug!("connected to {}", addr);
                    return Ok(stream);
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(transport_err(
            command,
            match last_error {
                Some(e) => format!("cannot connect to {}:{}: {}", self.host, self.port, e),
                None => format!("{} resolved to no addresses", self.host),
            },
        ))
    }
}

impl ReportTransport for SshTransport {
    fn fetch_report(&self, command: &str) -> Result<Vec<String>> {
        let stream = self.connect(command)?;

        let mut session = Session::new()
            .map_err(|e| transport_err(command, format!("cannot create session: {}", e)))?;
        session.set_tcp_stream(stream);
        session.set_timeout(self.timeout.as_millis() as u32);

        session
            .handshake()
            .map_err(|e| transport_err(command, format!("handshake failed: {}", e)))?;
        session
            .userauth_password(&self.username, &self.password)
            .map_err(|e| {
                transport_err(
                    command,
                    format!("authentication failed for {}: {}", self.username, e),
                )
            })?;

        let mut channel = session
            .channel_session()
            .map_err(|e| transport_err(command, format!("cannot open channel: {}", e)))?;
        channel
            .exec(command)
            .map_err(|e| transport_err(command, format!("exec failed: {}", e)))?;

        let mut captured = String::new();
        channel
            .read_to_string(&mut captured)
            .map_err(|e| transport_err(command, format!("read failed: {}", e)))?;

        // The exit status is informational only; the captured report text
        // decides the verdict.
        let _ = channel.wait_close();
        if let Ok(status) = channel.exit_status() {
            debug!("remote command exited with status {}", status);
        }

        Ok(captured.lines().map(str::to_string).collect())
    }
}

fn transport_err(command: &str, detail: String) -> ProbeError {
    ProbeError::Transport {
        command: command.to_string(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_report_surfaces_connect_failure_as_transport_error() {
        // Port 1 on loopback is refused (or blocked) everywhere we run tests;
        // either way the failure must come back as a Transport error, never
        // a panic.
        let transport = SshTransport::new(
            "127.0.0.1",
            1,
            "root",
            "calvin",
            Duration::from_millis(200),
        );
        let err = transport.fetch_report("racadm getsensorinfo").unwrap_err();
        match err {
            ProbeError::Transport { command, detail } => {
                assert_eq!(command, "racadm getsensorinfo");
                assert!(!detail.is_empty());
            }
            other => panic!("expected Transport error, got {:?}", other),
        }
    }

    #[test]
    fn test_unresolvable_host_is_a_transport_error() {
        let transport = SshTransport::new(
            "idrac.invalid.",
            22,
            "root",
            "calvin",
            Duration::from_millis(200),
        );
        let err = transport.fetch_report("racadm getsensorinfo").unwrap_err();
        assert!(matches!(err, ProbeError::Transport { .. }));
    }
}
