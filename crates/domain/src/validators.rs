use std::net::Ipv6Addr;

const DEFAULT_DNS_PORT: u16 = 53;

pub fn validate_operator_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Operator name cannot be empty".to_string());
    }
    if name.len() > 200 {
        return Err("Operator name cannot exceed 200 characters".to_string());
    }
    Ok(())
}

/// Bring a configured resolver address into `host:port` form.
///
/// - `1.1.1.1` → `1.1.1.1:53`
/// - `2606:4700::1111` → `[2606:4700::1111]:53`
/// - `[2606:4700::1111]` → `[2606:4700::1111]:53`
/// - anything already carrying a port is kept as is
pub fn normalize_server_address(address: &str) -> String {
    let address = address.trim();

    if address.parse::<Ipv6Addr>().is_ok() {
        return format!("[{}]:{}", address, DEFAULT_DNS_PORT);
    }

    if let Some(inner) = address.strip_prefix('[') {
        if inner.ends_with(']') {
            return format!("{}:{}", address, DEFAULT_DNS_PORT);
        }
        return address.to_string();
    }

    if address.contains(':') {
        return address.to_string();
    }

    format!("{}:{}", address, DEFAULT_DNS_PORT)
}

/// Minimal syntactic check for a queried domain name.
pub fn validate_domain_name(domain: &str) -> Result<(), String> {
    let domain = domain.trim().trim_end_matches('.');
    if domain.is_empty() {
        return Err("Domain cannot be empty".to_string());
    }
    if domain.len() > 253 {
        return Err("Domain cannot exceed 253 characters".to_string());
    }
    for label in domain.split('.') {
        if label.is_empty() || label.len() > 63 {
            return Err(format!("Invalid label in domain '{}'", domain));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(format!("Label '{}' cannot start or end with '-'", label));
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(format!("Label '{}' contains invalid characters", label));
        }
    }
    Ok(())
}
