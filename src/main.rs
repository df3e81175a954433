use clap::Parser;
use orcamento::cli::{Cli, Commands};
use orcamento::types::config::Config;
use orcamento::BudgetResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> BudgetResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet); a malformed file is an error
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default_config()
    };

    // CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("orcamento={}", log_level)
            .parse()
            .unwrap_or_else(|_| "orcamento=info".parse().expect("fallback directive is valid")),
    );

    if config.general.log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            orcamento::cli::commands::init(path).await?;
        }
        Commands::Demo { calls, delay_ms } => {
            orcamento::cli::commands::demo(calls, delay_ms, &config).await?;
        }
        Commands::Export { format, output } => {
            orcamento::cli::commands::export(format, output, &config).await?;
        }
        Commands::Orders { count } => {
            orcamento::cli::commands::orders(count).await?;
        }
        Commands::Register => {
            orcamento::cli::commands::register(&config).await?;
        }
        Commands::Version => {
            orcamento::cli::commands::version();
        }
    }

    Ok(())
}
