use ferrous_dnscheck_domain::validators::normalize_server_address;
use ferrous_dnscheck_domain::{ConfigError, ResolverEndpoint};
use std::path::Path;
use tracing::{debug, info};

const COLUMN_SEPARATOR: char = ';';

/// Reads the resolver list: a `;`-separated text file whose first line is a
/// header, one `operator;address` row per resolver.
pub struct ServerListLoader;

impl ServerListLoader {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<ResolverEndpoint>, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let servers = Self::parse(&content);
        info!(path = %path.display(), count = servers.len(), "Resolver list loaded");
        Ok(servers)
    }

    /// Rows with fewer than two columns are skipped. Extra columns are ignored.
    pub fn parse(content: &str) -> Vec<ResolverEndpoint> {
        content
            .lines()
            .skip(1)
            .filter_map(|line| {
                let mut cols = line.split(COLUMN_SEPARATOR).map(str::trim);
                let (operator, address) = match (cols.next(), cols.next()) {
                    (Some(operator), Some(address)) => (operator, address),
                    _ => {
                        if !line.trim().is_empty() {
                            debug!(line = %line, "Skipping resolver row without address column");
                        }
                        return None;
                    }
                };
                Some(ResolverEndpoint::new(
                    operator,
                    normalize_server_address(address),
                ))
            })
            .collect()
    }
}
