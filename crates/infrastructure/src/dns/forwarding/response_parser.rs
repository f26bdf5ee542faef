use bytes::Bytes;
use ferrous_dnscheck_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::net::IpAddr;
use tracing::debug;

/// The parts of an upstream answer a comparison run looks at.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub addresses: Vec<IpAddr>,

    /// CNAME targets in answer order, root dot included.
    pub cname_chain: Vec<String>,

    /// One string per TXT record, its character-strings concatenated.
    pub txts: Vec<String>,

    /// NS hosts, root dot included.
    pub ns: Vec<String>,

    pub rcode: ResponseCode,

    pub truncated: bool,
}

impl DnsResponse {
    /// Final CNAME target, empty when the name is not an alias.
    pub fn canonical_name(&self) -> &str {
        self.cname_chain.last().map(String::as_str).unwrap_or("")
    }

    /// Turn any non-NOERROR rcode into a lookup failure.
    ///
    /// NOERROR with no answers (NODATA) passes: it is an empty record set.
    pub fn into_success(self, domain: &str, server: &str) -> Result<Self, DomainError> {
        if self.rcode == ResponseCode::NoError {
            return Ok(self);
        }
        Err(DomainError::LookupFailure(format!(
            "{} returned {} for {}",
            server,
            ResponseParser::rcode_to_status(self.rcode),
            domain
        )))
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse_bytes(response_bytes: Bytes) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(&response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut addresses = Vec::with_capacity(message.answers().len().min(8));
        let mut cname_chain = Vec::new();
        let mut txts = Vec::new();
        let mut ns = Vec::new();

        for record in message.answers() {
            match record.data() {
                RData::A(a) => addresses.push(IpAddr::V4(a.0)),
                RData::AAAA(aaaa) => addresses.push(IpAddr::V6(aaaa.0)),
                RData::CNAME(canonical) => {
                    let name = canonical.to_utf8();
                    debug!(cname = %name, "CNAME record found");
                    cname_chain.push(name);
                }
                RData::TXT(txt) => {
                    let joined: String = txt
                        .txt_data()
                        .iter()
                        .map(|chunk| String::from_utf8_lossy(chunk))
                        .collect();
                    txts.push(joined);
                }
                RData::NS(host) => ns.push(host.to_utf8()),
                _ => {}
            }
        }

        debug!(
            rcode = ?rcode,
            addresses = addresses.len(),
            cname_hops = cname_chain.len(),
            txts = txts.len(),
            ns = ns.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            addresses,
            cname_chain,
            txts,
            ns,
            rcode,
            truncated,
        })
    }

    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        Self::parse_bytes(Bytes::copy_from_slice(response_bytes))
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
