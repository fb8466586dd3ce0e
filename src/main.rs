mod commands;
mod gateway;
mod i18n;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sapa_channels::TelegramChannel;
use sapa_core::config::{self, mask_secret, Config};
use sapa_core::traits::{Channel, Provider, WeatherSource};
use sapa_memory::Store;
use sapa_providers::OpenAiProvider;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

#[derive(Parser)]
#[command(
    name = "sapa",
    version,
    about = "Sapa: Telegram companion with AI chat, weather and weekend workout reminders"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, env = "SAPA_CONFIG", default_value = "config.toml")]
    config: String,

    /// Also write logs to a daily-rotated `sapa.log` in this directory.
    #[arg(long, env = "SAPA_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot and poll Telegram until Ctrl-C.
    Start,
    /// Validate the configuration and print a summary.
    Check,
    /// Send the weekend workout reminder to the configured user now.
    RemindNow,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing .env file is fine.
    let dotenv = dotenvy::dotenv();

    // Logging starts at the default level so config loading is visible;
    // the configured level is applied once the config is known.
    let (_log_guard, log_filter) = init_logging(DEFAULT_LOG_LEVEL, cli.log_dir.as_deref());

    if let Ok(path) = dotenv {
        info!("loaded environment from {}", path.display());
    }

    let loaded = config::load(&cli.config);
    if let Ok(cfg) = &loaded {
        if let Err(e) = log_filter.reload(filter_for(&cfg.bot.log_level)) {
            warn!("could not apply log level {}: {e}", cfg.bot.log_level);
        }
    }

    let cfg = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e}");
            return Err(e).context(format!("invalid configuration ({})", cli.config));
        }
    };

    match cli.command {
        Commands::Start => start(cfg).await,
        Commands::Check => {
            print_summary(&cli.config, &cfg);
            Ok(())
        }
        Commands::RemindNow => remind_now(cfg).await,
    }
}

const DEFAULT_LOG_LEVEL: &str = "info";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// `RUST_LOG` overrides `level`.
fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the tracing subscriber: stderr always, plus a rolling file when `log_dir` is set.
///
/// The returned handle swaps the level filter at runtime.
fn init_logging(
    level: &str,
    log_dir: Option<&std::path::Path>,
) -> (Option<WorkerGuard>, FilterHandle) {
    let (filter, handle) = reload::Layer::new(filter_for(level));
    let stderr = fmt::layer().with_writer(std::io::stderr);

    let guard = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "sapa.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(filter).with(stderr).init();
            None
        }
    };
    (guard, handle)
}

/// Everything the bot runs on, built from a validated config.
struct Services {
    channel: Arc<TelegramChannel>,
    provider: Arc<OpenAiProvider>,
    weather: Option<Arc<dyn WeatherSource>>,
    memory: Store,
}

fn build_services(cfg: &Config) -> anyhow::Result<Services> {
    let channel = Arc::new(TelegramChannel::new(cfg.telegram.clone()));
    let provider = Arc::new(OpenAiProvider::from_config(&cfg.openai)?);
    let weather = sapa_weather::build_source(&cfg.weather, cfg.reminder.offset()?)?;
    let memory = Store::new(cfg.bot.default_language);
    Ok(Services {
        channel,
        provider,
        weather,
        memory,
    })
}

fn build_gateway(cfg: Config, services: Services) -> anyhow::Result<gateway::Gateway> {
    let Services {
        channel,
        provider,
        weather,
        memory,
    } = services;
    Ok(gateway::Gateway::new(
        provider as Arc<dyn Provider>,
        channel as Arc<dyn Channel>,
        weather,
        memory,
        cfg,
    )?)
}

async fn start(cfg: Config) -> anyhow::Result<()> {
    info!("Starting {}...", cfg.bot.name);
    let services = build_services(&cfg)?;

    let bot = match services.channel.get_me().await {
        Ok(bot) => bot,
        Err(e) => {
            error!("failed to verify Telegram bot token: {e}");
            return Err(e.into());
        }
    };

    info!("Telegram bot: @{} (id {})", bot.username, bot.id);
    info!(
        "OpenAI: model {} | max_tokens {} | temperature {}",
        services.provider.model(),
        cfg.openai.max_tokens,
        cfg.openai.temperature
    );
    match &services.weather {
        Some(source) => info!(
            "Weather: {} ({})",
            source.attribution(),
            cfg.weather.location_label()
        ),
        None => warn!("Weather: disabled"),
    }
    info!(
        "Reminder: Saturday {} ({}) | target: {}",
        cfg.reminder.time,
        cfg.reminder.timezone,
        cfg.reminder
            .target_user
            .map_or_else(|| "on /reminder".to_string(), |id| id.to_string())
    );

    let gw = Arc::new(build_gateway(cfg, services)?);
    gw.run().await
}

async fn remind_now(cfg: Config) -> anyhow::Result<()> {
    let target = cfg
        .reminder
        .target_user
        .context("REMINDER_USER_ID (reminder.target_user) is not set")?;
    let services = build_services(&cfg)?;
    let gw = build_gateway(cfg, services)?;
    gw.reminder().fire_now(target).await?;
    info!("reminder sent to {target}");
    Ok(())
}

fn print_summary(path: &str, cfg: &Config) {
    println!("{}: configuration OK\n", cfg.bot.name);
    println!("Config file:       {path}");
    println!("Default language:  {}", cfg.bot.default_language);
    println!("Telegram token:    {}", mask_secret(&cfg.telegram.bot_token));
    println!("OpenAI key:        {}", mask_secret(&cfg.openai.api_key));
    println!("OpenAI model:      {}", cfg.openai.model);
    println!("Max tokens:        {}", cfg.openai.max_tokens);
    println!("Temperature:       {}", cfg.openai.temperature);
    println!(
        "Weather source:    {:?} ({})",
        cfg.weather.source,
        cfg.weather.location_label()
    );
    println!(
        "Reminder:          Saturday {} {}",
        cfg.reminder.time, cfg.reminder.timezone
    );
    match cfg.reminder.target_user {
        Some(id) => println!("Reminder user:     {id}"),
        None => println!("Reminder user:     (set by /reminder)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_reloads_to_configured_level() {
        let (filter, handle) = reload::Layer::new(EnvFilter::new(DEFAULT_LOG_LEVEL));
        let subscriber = tracing_subscriber::registry().with(filter);

        tracing::subscriber::with_default(subscriber, || {
            assert!(!tracing::enabled!(tracing::Level::DEBUG));
            handle.reload(EnvFilter::new("debug")).unwrap();
            tracing::callsite::rebuild_interest_cache();
            assert!(tracing::enabled!(tracing::Level::DEBUG));
        });
    }
}
