use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};

use order_search::config::{Config, ConfigError, ResultPolicy};
use order_search::coordinator::{CoordinatorSettings, OrderSearchCoordinator};
use order_search::logging::init_tracing;
use order_search::source::SampleOrders;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    LastWriteWins,
    LatestRequest,
}

impl From<PolicyArg> for ResultPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::LastWriteWins => ResultPolicy::LastWriteWins,
            PolicyArg::LatestRequest => ResultPolicy::LatestRequest,
        }
    }
}

/// Browse and search orders in the terminal.
#[derive(Debug, Parser)]
#[command(name = "order-search", version, about)]
struct Cli {
    /// Config file path (default: ~/.config/order-search/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override search debounce delay in milliseconds
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Override simulated data source latency in milliseconds
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Make every data source request fail
    #[arg(long)]
    fail: bool,

    /// Which fetch results may update the list
    #[arg(long, value_enum, value_name = "POLICY")]
    policy: Option<PolicyArg>,
}

impl Cli {
    fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(debounce_ms) = self.debounce_ms {
            config.search.debounce_ms = debounce_ms;
        }
        if let Some(latency_ms) = self.latency_ms {
            config.source.latency_ms = latency_ms;
        }
        if self.fail {
            config.source.fail_requests = true;
        }
        if let Some(policy) = self.policy {
            config.search.result_policy = policy.into();
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    let source = SampleOrders::from_config(&config.source)?;
    tracing::info!(
        orders = source.orders().len(),
        debounce_ms = config.search.debounce_ms,
        policy = ?config.search.result_policy,
        "Starting order search"
    );

    let coordinator =
        OrderSearchCoordinator::new(Arc::new(source), CoordinatorSettings::from(&config.search));
    order_search::ui::run(coordinator).await?;
    Ok(())
}
