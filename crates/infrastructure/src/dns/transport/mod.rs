pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use ferrous_dnscheck_domain::{DomainError, RecordType};
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Network a lookup asks for. The resolver address never decides this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Udp,
    Tcp,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Udp => "UDP",
            Network::Tcp => "TCP",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for sending raw DNS messages over the wire.
///
/// Returns the raw response bytes. Running out of `timeout` is reported as
/// a `LookupTimeout` for `record_type`.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<Bytes, DomainError>;
}

/// Enum-dispatched transport.
pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<Bytes, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, record_type, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, record_type, timeout).await,
        }
    }
}

/// Create the transport a lookup asked for, aimed at `server_addr`.
pub fn create_transport(
    network: Network,
    server_addr: SocketAddr,
    connect_timeout: Duration,
) -> Transport {
    match network {
        Network::Udp => Transport::Udp(udp::UdpTransport::new(server_addr)),
        Network::Tcp => Transport::Tcp(tcp::TcpTransport::new(server_addr, connect_timeout)),
    }
}

pub(crate) fn io_failure(server: SocketAddr, network: Network, what: &str, e: std::io::Error) -> DomainError {
    DomainError::LookupFailure(format!("{} {} {}: {}", network, what, server, e))
}

pub(crate) fn io_timeout(
    server: SocketAddr,
    network: Network,
    what: &str,
    record_type: RecordType,
    timeout: Duration,
) -> DomainError {
    debug!(server = %server, network = %network, record_type = %record_type, "Timeout {}", what);
    DomainError::LookupTimeout {
        server: server.to_string(),
        record_type,
        timeout_ms: timeout.as_millis() as u64,
    }
}
