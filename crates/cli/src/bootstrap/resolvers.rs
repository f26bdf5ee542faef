use ferrous_dnscheck_domain::{Config, ResolverEndpoint};
use ferrous_dnscheck_infrastructure::config::ServerListLoader;
use tracing::{info, warn};

/// Resolvers from `dns.servers_file` when set, the inline `[[resolvers]]`
/// tables otherwise.
pub fn load_resolvers(config: &Config) -> anyhow::Result<Vec<ResolverEndpoint>> {
    let resolvers = match &config.dns.servers_file {
        Some(path) => ServerListLoader::from_file(path)?,
        None => config.resolver_endpoints(),
    };

    if resolvers.is_empty() {
        warn!("No resolvers configured, every comparison will be empty");
    } else {
        info!(count = resolvers.len(), "Resolvers loaded");
    }

    Ok(resolvers)
}
