use super::{io_failure, io_timeout, DnsTransport, Network};
use async_trait::async_trait;
use bytes::Bytes;
use ferrous_dnscheck_domain::{DomainError, RecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP (RFC 1035 §4.2.2): each message carries a 2-byte length prefix.
pub struct TcpTransport {
    server_addr: SocketAddr,
    connect_timeout: Duration,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr, connect_timeout: Duration) -> Self {
        Self {
            server_addr,
            connect_timeout,
        }
    }

    async fn exchange(
        &self,
        stream: &mut TcpStream,
        message_bytes: &[u8],
    ) -> Result<Vec<u8>, std::io::Error> {
        let len = u16::try_from(message_bytes.len()).map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "DNS message too large")
        })?;

        let mut framed = Vec::with_capacity(message_bytes.len() + 2);
        framed.extend_from_slice(&len.to_be_bytes());
        framed.extend_from_slice(message_bytes);
        stream.write_all(&framed).await?;

        let response_len = stream.read_u16().await? as usize;
        let mut response = vec![0u8; response_len];
        stream.read_exact(&mut response).await?;
        Ok(response)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<Bytes, DomainError> {
        let mut stream =
            tokio::time::timeout(self.connect_timeout, TcpStream::connect(self.server_addr))
                .await
                .map_err(|_| {
                    io_timeout(self.server_addr, Network::Tcp, "connecting to", record_type, self.connect_timeout)
                })?
                .map_err(|e| io_failure(self.server_addr, Network::Tcp, "connect to", e))?;

        let response = tokio::time::timeout(timeout, self.exchange(&mut stream, message_bytes))
            .await
            .map_err(|_| io_timeout(self.server_addr, Network::Tcp, "waiting for", record_type, timeout))?
            .map_err(|e| io_failure(self.server_addr, Network::Tcp, "exchange with", e))?;

        debug!(server = %self.server_addr, bytes_received = response.len(), "TCP response received");

        Ok(Bytes::from(response))
    }
}
