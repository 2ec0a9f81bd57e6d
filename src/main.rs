//! Flipbook CLI
//!
//! Command-line interface for the Flipbook preference store and sound core.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;

use flipbook::cli::{commands, Cli, Commands};
use flipbook::{AppConfig, SettingsStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.settings.clone(), cli.verbose);

    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_filter())).init();

    debug!("Flipbook v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd, &config),
        None => {
            println!("Flipbook v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn open_store(config: &AppConfig) -> anyhow::Result<SettingsStore> {
    SettingsStore::open_file(&config.settings_path).with_context(|| {
        format!(
            "could not open settings at {}",
            config.settings_path.display()
        )
    })
}

fn handle_command(cmd: Commands, config: &AppConfig) -> anyhow::Result<()> {
    let result = match cmd {
        Commands::Get { key } => commands::get(&open_store(config)?, &key),
        Commands::Set { key, value } => commands::set(&mut open_store(config)?, &key, &value),
        Commands::List { page } => commands::list(&open_store(config)?, page),
        Commands::Reset { key } => commands::reset(&mut open_store(config)?, key.as_deref()),
        Commands::AttachSound {
            file,
            frame,
            layer_kind,
        } => commands::attach_sound(&file, frame, layer_kind),
    };

    result.map_err(|e| {
        let hint = e
            .recovery_suggestion()
            .map(|s| format!("\nhint: {}", s))
            .unwrap_or_default();
        anyhow::anyhow!("[{}] {}{}", e.error_code(), e, hint)
    })
}
