pub mod dns_server_mock;

pub use dns_server_mock::{
    build_response, MockDnsServer, MockZone, RCODE_NXDOMAIN, RCODE_SERVFAIL,
};
