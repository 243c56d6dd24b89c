//! bento CLI: demo harness and theme management

mod demo;

use bento_config::{FileThemeStore, MemoryThemeStore, ThemeStore, UiConfig};
use bento_tui::{Theme, ThemeManager};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Terminal UI composition toolkit
#[derive(Parser)]
#[command(name = "bento")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write debug logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo app (default when no command specified)
    Demo,

    /// List theme presets
    Themes {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(subcommand)]
        action: Option<ThemesAction>,
    },
}

#[derive(Subcommand)]
enum ThemesAction {
    /// Persist a theme preset as the default
    Set {
        /// Preset name
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Error: could not open log file {}: {e}", path.display());
            std::process::exit(1);
        }
    }

    match cli.command {
        None | Some(Commands::Demo) => cmd_demo(),
        Some(Commands::Themes { json, action: None }) => cmd_themes(json),
        Some(Commands::Themes {
            action: Some(ThemesAction::Set { name }),
            ..
        }) => cmd_themes_set(&name),
    }
}

/// Route tracing output to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn cmd_demo() {
    let config = match UiConfig::default_path().and_then(|path| UiConfig::load(&path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: using default config: {e}");
            UiConfig::default()
        }
    };

    let themes = match FileThemeStore::default_location() {
        Ok(store) => {
            let has_stored = matches!(store.load(), Ok(Some(_)));
            let mut themes = ThemeManager::load(store);
            if !has_stored {
                preview_configured(&mut themes, &config);
            }
            themes
        }
        Err(e) => {
            tracing::warn!(error = %e, "Theme changes will not be saved");
            ThemeManager::load(MemoryThemeStore::new())
        }
    };
    tracing::info!(theme = themes.current_name(), "Starting demo");

    let mut shell = demo::build_shell(&config, themes);
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: could not start runtime: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = rt.block_on(bento_tui::run_app(&mut shell, config.tick_rate_ms)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Use the configured preset when nothing was persisted yet.
fn preview_configured(themes: &mut ThemeManager, config: &UiConfig) {
    if let Err(e) = themes.preview(&config.theme) {
        tracing::warn!(error = %e, "Ignoring configured theme");
    }
}

fn cmd_themes(json: bool) {
    let stored = FileThemeStore::default_location()
        .ok()
        .and_then(|store| store.load().ok().flatten());

    if json {
        let output = serde_json::json!({
            "themes": Theme::available(),
            "current": stored,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    for name in Theme::available() {
        let marker = if stored.as_deref() == Some(*name) {
            "*"
        } else {
            " "
        };
        println!("{marker} {name}");
    }
}

fn cmd_themes_set(name: &str) {
    if Theme::preset(name).is_none() {
        eprintln!("Unknown theme: {name}");
        eprintln!("Available: {}", Theme::available().join(", "));
        std::process::exit(1);
    }

    let result = FileThemeStore::default_location().and_then(|store| store.save(name));
    match result {
        Ok(()) => println!("Theme set to {name}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
