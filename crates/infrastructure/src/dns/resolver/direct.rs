use crate::dns::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use crate::dns::transport::{self, Network};
use async_trait::async_trait;
use ferrous_dnscheck_application::ports::UpstreamResolver;
use ferrous_dnscheck_domain::{DomainError, RecordType};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Floor for the TCP leg when a truncated answer used up the query budget.
const MIN_TCP_FALLBACK: Duration = Duration::from_millis(500);

/// Resolver bound to a single upstream socket address.
pub struct DirectResolver {
    server_addr: SocketAddr,
    server_display: String,
    connect_timeout: Duration,
    query_timeout: Duration,
}

impl DirectResolver {
    pub(crate) fn new(
        server_addr: SocketAddr,
        connect_timeout: Duration,
        query_timeout: Duration,
    ) -> Self {
        Self {
            server_addr,
            server_display: server_addr.to_string(),
            connect_timeout,
            query_timeout,
        }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// One question, one answer. A truncated UDP answer is re-asked over TCP.
    pub async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
        network: Network,
    ) -> Result<DnsResponse, DomainError> {
        let start = Instant::now();
        let (id, query_bytes) = MessageBuilder::build_query_with_id(domain, &record_type)?;

        let response = self
            .exchange(network, id, &query_bytes, record_type, self.query_timeout)
            .await?;

        let response = if response.truncated && network == Network::Udp {
            debug!(
                server = %self.server_addr,
                record_type = %record_type,
                "Response truncated (TC bit), re-issuing via TCP"
            );
            let remaining = self
                .query_timeout
                .checked_sub(start.elapsed())
                .unwrap_or(MIN_TCP_FALLBACK)
                .max(MIN_TCP_FALLBACK);
            self.exchange(Network::Tcp, id, &query_bytes, record_type, remaining)
                .await?
        } else {
            response
        };

        debug!(
            server = %self.server_addr,
            domain = %domain,
            record_type = %record_type,
            rcode = ?response.rcode,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Upstream answered"
        );

        response.into_success(domain, &self.server_display)
    }

    async fn exchange(
        &self,
        network: Network,
        id: u16,
        query_bytes: &[u8],
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let dns_transport = transport::create_transport(network, self.server_addr, self.connect_timeout);
        let bytes = dns_transport.send(query_bytes, record_type, timeout).await?;
        let response = ResponseParser::parse_bytes(bytes)?;

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} answered with ID {} for query {}",
                self.server_addr, response.id, id
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl UpstreamResolver for DirectResolver {
    async fn lookup_addresses(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        let (v4, v6) = tokio::join!(
            self.query(domain, RecordType::A, Network::Udp),
            self.query(domain, RecordType::AAAA, Network::Udp)
        );

        let addresses = merge_families(v4, v6)?;
        Ok(addresses.into_iter().map(|ip| ip.to_string()).collect())
    }

    /// A CNAME question only yields the first hop, so the chain is read from
    /// the answer to an A question, which carries every hop.
    async fn lookup_cname(&self, domain: &str) -> Result<String, DomainError> {
        let response = self.query(domain, RecordType::A, Network::Udp).await?;
        Ok(response.canonical_name().to_string())
    }

    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        Ok(self.query(domain, RecordType::TXT, Network::Udp).await?.txts)
    }

    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        Ok(self.query(domain, RecordType::NS, Network::Udp).await?.ns)
    }

    fn server(&self) -> &str {
        &self.server_display
    }
}

/// A then AAAA. One family failing is tolerated when the other produced
/// addresses; a timeout in either family is not.
fn merge_families(
    v4: Result<DnsResponse, DomainError>,
    v6: Result<DnsResponse, DomainError>,
) -> Result<Vec<IpAddr>, DomainError> {
    match (v4, v6) {
        (Ok(v4), Ok(v6)) => Ok(v4.addresses.into_iter().chain(v6.addresses).collect()),
        (Err(e), _) | (_, Err(e)) if e.is_timeout() => Err(e),
        (Ok(found), Err(e)) | (Err(e), Ok(found)) => {
            if found.addresses.is_empty() {
                Err(e)
            } else {
                debug!(error = %e, "One address family failed, keeping the other");
                Ok(found.addresses)
            }
        }
        (Err(e), Err(_)) => Err(e),
    }
}
