use std::io::ErrorKind;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use rekey_common::remote::ReachabilityProbe;

/// Liveness check via a bounded TCP handshake attempt.
///
/// A completed connection proves the host is up; so does a connection
/// refused, since something answered with a RST. Timeouts and resolution
/// failures count as unreachable.
pub struct TcpProbe {
    pub port: u16,
    pub timeout: Duration,
}

impl TcpProbe {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }
}

#[async_trait]
impl ReachabilityProbe for TcpProbe {
    async fn probe(&self, host: &str) -> bool {
        let addr: String = format!("{}:{}", host, self.port);

        match timeout(self.timeout, TcpStream::connect(&addr)).await {
            Ok(Ok(_stream)) => true,
            Ok(Err(e)) => {
                debug!(host, error = %e, "probe connect error");
                e.kind() == ErrorKind::ConnectionRefused
            }
            Err(_elapsed) => false,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
