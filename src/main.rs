use clap::Parser;
use sourcemap_remap::cli::{commands, Cli, Commands, Verbosity};
use sourcemap_remap::config::Config;
use sourcemap_remap::ui::formatter::Formatter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_tracing(verbosity: Verbosity) {
    let log_level = verbosity.to_log_level();
    let fallback_filter = format!("sourcemap_remap={}", log_level);

    let use_json = std::env::var("REMAP_LOG_JSON").is_ok();

    if use_json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.clone().into()),
            )
            .with(json_layer)
            .init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.into()),
            )
            .with(fmt_layer)
            .init();
    }
}

fn main() -> miette::Result<()> {
    Formatter::configure_colors_from_env();

    let cli = Cli::parse();
    initialize_tracing(cli.verbosity());
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        git_hash = env!("GIT_HASH"),
        rustc = env!("RUSTC_VERSION"),
        "Starting sourcemap-remap"
    );

    let config = Config::load_or_default(cli.config.as_deref());

    match cli.command {
        Commands::Flatten(args) => commands::flatten(args, &config),
        Commands::Lookup(args) => commands::lookup(args, &config),
        Commands::Completions(args) => {
            commands::completions(args);
            Ok(())
        }
    }
}
