#![allow(dead_code)]
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;
const TYPE_CNAME: u16 = 5;
const TYPE_TXT: u16 = 16;
const TYPE_AAAA: u16 = 28;

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_NXDOMAIN: u8 = 3;

/// What the mock server knows about the single name it serves.
#[derive(Debug, Clone, Default)]
pub struct MockZone {
    pub a: Vec<Ipv4Addr>,
    pub aaaa: Vec<Ipv6Addr>,
    /// Alias chain starting at the queried name, one hop per entry.
    pub cname: Vec<String>,
    /// One entry per TXT record, each split into character-strings.
    pub txt: Vec<Vec<String>>,
    pub ns: Vec<String>,
    pub rcode: u8,
    /// Answer UDP queries with an empty TC response; TCP gets the real answer.
    pub truncate_udp: bool,
    /// Flip the response ID. UDP answers are then followed by a correct one
    /// unless `silent` is also set.
    pub wrong_id: bool,
    /// Never answer.
    pub silent: bool,
}

impl MockZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_a(mut self, ip: &str) -> Self {
        self.a.push(ip.parse().unwrap());
        self
    }

    pub fn with_aaaa(mut self, ip: &str) -> Self {
        self.aaaa.push(ip.parse().unwrap());
        self
    }

    /// Append one hop to the alias chain.
    pub fn with_cname(mut self, target: &str) -> Self {
        self.cname.push(target.to_string());
        self
    }

    pub fn with_txt(mut self, chunks: &[&str]) -> Self {
        self.txt.push(chunks.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn with_ns(mut self, host: &str) -> Self {
        self.ns.push(host.to_string());
        self
    }

    pub fn with_rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn truncating(mut self) -> Self {
        self.truncate_udp = true;
        self
    }

    pub fn with_wrong_id(mut self) -> Self {
        self.wrong_id = true;
        self
    }

    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    /// Answer records as `(owner, type, rdata)`. `None` owner is the
    /// question name.
    ///
    /// Like a recursive resolver, address answers carry the whole alias chain
    /// first, while a CNAME question only gets the first hop.
    fn answers(&self, qtype: u16) -> Vec<(Option<String>, u16, Vec<u8>)> {
        let chain = || {
            let mut owner = None;
            let mut records = Vec::new();
            for target in &self.cname {
                records.push((owner.clone(), TYPE_CNAME, encode_name(target)));
                owner = Some(target.clone());
            }
            (owner, records)
        };

        match qtype {
            TYPE_A => {
                let (owner, mut records) = chain();
                records.extend(
                    self.a
                        .iter()
                        .map(|ip| (owner.clone(), TYPE_A, ip.octets().to_vec())),
                );
                records
            }
            TYPE_AAAA => {
                let (owner, mut records) = chain();
                records.extend(
                    self.aaaa
                        .iter()
                        .map(|ip| (owner.clone(), TYPE_AAAA, ip.octets().to_vec())),
                );
                records
            }
            TYPE_CNAME => self
                .cname
                .first()
                .map(|target| (None, TYPE_CNAME, encode_name(target)))
                .into_iter()
                .collect(),
            TYPE_TXT => self
                .txt
                .iter()
                .map(|chunks| {
                    let mut rdata = Vec::new();
                    for chunk in chunks {
                        rdata.push(chunk.len() as u8);
                        rdata.extend_from_slice(chunk.as_bytes());
                    }
                    (None, TYPE_TXT, rdata)
                })
                .collect(),
            TYPE_NS => self
                .ns
                .iter()
                .map(|host| (None, TYPE_NS, encode_name(host)))
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Build the wire response to `query` (a single-question message without
/// additional records).
pub fn build_response(query: &[u8], zone: &MockZone, over_udp: bool) -> Vec<u8> {
    if query.len() < 16 {
        return vec![];
    }

    let qtype = u16::from_be_bytes([query[query.len() - 4], query[query.len() - 3]]);
    let truncated = over_udp && zone.truncate_udp;
    let answers = if truncated || zone.rcode != RCODE_NOERROR {
        Vec::new()
    } else {
        zone.answers(qtype)
    };

    let mut response = Vec::with_capacity(512);

    let id = u16::from_be_bytes([query[0], query[1]]);
    let id = if zone.wrong_id { id.wrapping_add(1) } else { id };
    response.extend_from_slice(&id.to_be_bytes());

    // QR=1, RD=1, TC as configured; RA=1 and the rcode
    response.push(0x81 | if truncated { 0x02 } else { 0x00 });
    response.push(0x80 | (zone.rcode & 0x0f));

    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    response.extend_from_slice(&query[12..]);

    for (owner, rtype, rdata) in answers {
        match owner {
            Some(name) => response.extend_from_slice(&encode_name(&name)),
            None => response.extend_from_slice(&[0xc0, 0x0c]), // pointer to question name
        }
        response.extend_from_slice(&rtype.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]); // class IN
        response.extend_from_slice(&60u32.to_be_bytes());
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&rdata);
    }

    response
}

/// Mock DNS server answering from a [`MockZone`] over UDP and TCP on the
/// same loopback port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(zone: MockZone) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;
        let listener = TcpListener::bind(local_addr).await?;

        let zone = Arc::new(zone);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if zone.silent {
                                continue;
                            }
                            let response = build_response(&buf[..len], &zone, true);
                            let _ = socket.send_to(&response, peer).await;
                            if zone.wrong_id {
                                let honest = MockZone { wrong_id: false, ..(*zone).clone() };
                                let response = build_response(&buf[..len], &honest, true);
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            let zone = Arc::clone(&zone);
                            tokio::spawn(async move {
                                let Ok(len) = stream.read_u16().await else { return };
                                let mut query = vec![0u8; len as usize];
                                if stream.read_exact(&mut query).await.is_err() || zone.silent {
                                    return;
                                }
                                let response = build_response(&query, &zone, false);
                                let mut framed = (response.len() as u16).to_be_bytes().to_vec();
                                framed.extend_from_slice(&response);
                                let _ = stream.write_all(&framed).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_name() {
        assert_eq!(
            encode_name("ns1.example.com."),
            b"\x03ns1\x07example\x03com\x00".to_vec()
        );
    }
}
