use clap::Parser;
use lesson_core::AppError;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let locale = cli.locale.map(Into::into).unwrap_or_default();

    if let Err(error) = run(cli).await {
        let error = AppError::coerce(error, locale);
        eprintln!("lsn error: {error}");
        if !error.user_message.is_empty() {
            eprintln!("  {}", error.user_message);
        }
        for action in &error.actions {
            eprintln!("  -> {}", action.label);
        }
        std::process::exit(1);
    }
}

async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    let config = lesson_config::LessonConfig::load_with_dotenv()?;
    let ctx = context::AppContext::init(config, &flags)?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// Default log level when `LESSON_LOG` is unset. `--quiet` wins over `--verbose`.
const fn log_level(flags: &cli::GlobalFlags) -> &'static str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    }
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("LESSON_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level(flags)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
