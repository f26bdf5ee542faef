use super::{io_failure, io_timeout, DnsTransport, Network};
use async_trait::async_trait;
use bytes::Bytes;
use ferrous_dnscheck_domain::{DomainError, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP, one ephemeral socket per query.
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    /// A datagram answers the query only if it comes from the server and
    /// echoes the query ID.
    fn is_answer(&self, query_id: &[u8], from_addr: SocketAddr, datagram: &[u8]) -> bool {
        if from_addr != self.server_addr {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "Dropping UDP datagram from unexpected source"
            );
            return false;
        }
        if datagram.len() < 2 || &datagram[..2] != query_id {
            debug!(server = %self.server_addr, "Dropping UDP datagram with foreign ID");
            return false;
        }
        true
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<Bytes, DomainError> {
        let deadline = Instant::now() + timeout;

        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| io_failure(self.server_addr, Network::Udp, "bind for", e))?;

        let bytes_sent = timeout_at(deadline, socket.send_to(message_bytes, self.server_addr))
            .await
            .map_err(|_| io_timeout(self.server_addr, Network::Udp, "sending to", record_type, timeout))?
            .map_err(|e| io_failure(self.server_addr, Network::Udp, "send to", e))?;

        debug!(server = %self.server_addr, bytes_sent = bytes_sent, "UDP query sent");

        let query_id = message_bytes.get(..2).unwrap_or_default();
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let (bytes_received, from_addr) = timeout_at(deadline, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| io_timeout(self.server_addr, Network::Udp, "waiting for", record_type, timeout))?
                .map_err(|e| io_failure(self.server_addr, Network::Udp, "receive from", e))?;

            if !self.is_answer(query_id, from_addr, &recv_buf[..bytes_received]) {
                continue;
            }

            recv_buf.truncate(bytes_received);
            debug!(server = %self.server_addr, bytes_received = bytes_received, "UDP response received");
            return Ok(Bytes::from(recv_buf));
        }
    }
}
