use ferrous_dnscheck_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        lookup_timeout_ms = config.dns.lookup_timeout_ms,
        sort_order = %config.dns.sort_order,
        "Configuration loaded"
    );

    Ok(config)
}
