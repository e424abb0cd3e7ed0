use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use article_params::config::Config;
use article_params::SettingsField;

mod cli;

#[derive(Parser)]
#[command(name = "article-params")]
#[command(about = "Customize how an article is presented: font, size, colors and width")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to <config dir>/article-params/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the article preview with its settings panel
    Gui,

    /// List the available options for each setting
    Options {
        /// Only list options for this setting (e.g. font-size)
        #[arg(long)]
        field: Option<SettingsField>,
    },

    /// Print the custom properties produced by the default settings
    Css {
        /// Print a JSON object instead of an inline style
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Options { field }) => {
            cli::options::options_command(field)?;
        }
        Some(Commands::Css { json }) => {
            let config = Config::load(cli.config.as_deref())?;
            cli::css::css_command(&config, json)?;
        }
        Some(Commands::Gui) | None => {
            let config = Config::load(cli.config.as_deref())?;
            article_params::gui::run_gui(config)?;
        }
    }

    Ok(())
}
