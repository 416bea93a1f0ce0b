use bookshelf_core::*;
use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Interactive book catalog", long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Default log level when RUST_LOG is unset (overrides config)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The config picks the log level, so it is resolved first and its
    // source is logged once the subscriber exists.
    let (config, source) = Config::resolve(cli.config.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    bookshelf_core::logging::init(level);
    tracing::info!("{}", source);

    let mut catalog = Catalog::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    Menu::new(
        &mut catalog,
        stdin.lock(),
        stdout.lock(),
        MenuSettings::from(&config),
    )
    .run()?;

    tracing::debug!("Session ended with {} books in catalog", catalog.len());
    Ok(())
}
