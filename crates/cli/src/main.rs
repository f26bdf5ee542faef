//! # Ferrous DNSCheck
//!
//! Asks many resolvers the same question and shows which ones disagree with
//! the majority.

mod bootstrap;
mod di;
mod report;
mod server;

use clap::{Parser, Subcommand};
use ferrous_dnscheck_api::AppState;
use ferrous_dnscheck_domain::{validators::validate_domain_name, CliOverrides, RunStatus, SortOrder};
use tracing::info;

#[derive(Parser)]
#[command(name = "ferrous-dnscheck")]
#[command(version)]
#[command(about = "Compare DNS answers across many resolvers and flag the odd ones out")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "FERROUS_DNSCHECK_CONFIG")]
    config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Resolver list file (`operator;address` rows)
    #[arg(long, global = true)]
    servers: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the web front end and JSON API
    Serve {
        /// Bind address
        #[arg(short, long)]
        bind: Option<String>,

        /// Web server port
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },
    /// Query every resolver once and print the comparison
    Check {
        domain: String,

        /// Row order: elapsed or operator
        #[arg(short, long)]
        sort: Option<SortOrder>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (bind_address, web_port, sort_order) = match &cli.command {
        Command::Serve { bind, port } => (bind.clone(), *port, None),
        Command::Check { sort, .. } => (None, None, *sort),
    };

    let overrides = CliOverrides {
        bind_address,
        web_port,
        servers_file: cli.servers.clone(),
        sort_order,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let resolvers = bootstrap::load_resolvers(&config)?;
    let run_comparison = di::build_run_comparison(&config);

    match cli.command {
        Command::Serve { .. } => {
            info!(resolvers = resolvers.len(), "Starting Ferrous DNSCheck web server");
            let state = AppState::new(run_comparison, resolvers);
            server::start_web_server(&config, state).await
        }
        Command::Check { domain, .. } => {
            validate_domain_name(&domain).map_err(anyhow::Error::msg)?;

            let run = run_comparison.execute(&domain, &resolvers).await;
            print!("{}", report::render(&run));

            if run.status() == RunStatus::AllFailed {
                anyhow::bail!("All {} resolvers failed for {}", run.resolver_count, domain);
            }
            Ok(())
        }
    }
}
