//! Morse Tree - Main entrypoint.
//!
//! Loads configuration, initializes logging and then either runs the
//! interactive menu or a single codec command against the standard alphabet.

use clap::{Parser, Subcommand, ValueEnum};
use morse_tree_lib::config::{self, ConfigLoader, LogConfig, MorseConfig};
use morse_tree_lib::data_structures::MorseTree;
use morse_tree_lib::error::{MorseError, MorseResult};
use morse_tree_lib::menu::MorseMenu;
use morse_tree_lib::render::TreeLayout;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Morse tree.
#[derive(Parser, Debug)]
#[clap(name = "Morse Tree", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive menu
    Menu,

    /// Encode text using the standard alphabet
    Encode {
        /// Text to encode; several arguments are joined with spaces
        #[clap(required = true)]
        text: Vec<String>,
    },

    /// Decode Morse code using the standard alphabet
    Decode {
        /// Codes separated by spaces, words separated by /
        #[clap(required = true, allow_hyphen_values = true)]
        code: Vec<String>,
    },

    /// Render the standard alphabet tree
    Render {
        /// Output format
        #[clap(short, long, value_enum, default_value_t = RenderFormat::Svg)]
        format: RenderFormat,

        /// Output file (stdout when omitted)
        #[clap(short, long, value_parser)]
        output: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Formats supported by the render command.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum RenderFormat {
    /// SVG document
    Svg,
    /// Layout as JSON
    Json,
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> MorseResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_line_number(true)
        .with_file(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| MorseError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn write_output(output: Option<&PathBuf>, contents: &str) -> MorseResult<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, contents)?;
            info!("Output written to {:?}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{contents}")?;
        }
    }
    Ok(())
}

fn run(args: Args) -> MorseResult<()> {
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let command = args.command.unwrap_or(Command::Menu);

    let config = loader.load()?;
    init_logging(&config.log)?;

    match command {
        Command::Menu => {
            let mut tree = MorseTree::new();
            if config.alphabet.preload {
                tree.load_standard_alphabet();
            }
            info!(preloaded = config.alphabet.preload, "Starting menu");

            let stdin = io::stdin();
            let stdout = io::stdout();
            MorseMenu::new(tree, config.menu, stdin.lock(), stdout.lock()).run()
        }
        Command::Encode { text } => {
            let encoded = MorseTree::with_standard_alphabet().encode_word(&text.join(" "))?;
            write_output(None, &encoded)
        }
        Command::Decode { code } => {
            let decoded = MorseTree::with_standard_alphabet().decode_word(&code.join(" "))?;
            write_output(None, &decoded)
        }
        Command::Render { format, output } => {
            let tree = MorseTree::with_standard_alphabet();
            let layout = TreeLayout::compute(tree.root(), &config.render)
                .ok_or_else(|| MorseError::Custom("The tree is empty".to_string()))?;
            let rendered = match format {
                RenderFormat::Svg => layout.to_svg(),
                RenderFormat::Json => serde_json::to_string_pretty(&layout)?,
            };
            write_output(output.as_ref(), &rendered)
        }
        Command::Validate => write_output(None, "Configuration is valid"),
        Command::GenConfig { output } => {
            let toml = toml::to_string_pretty(&MorseConfig::default())?;
            write_output(Some(&output), &toml)
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();

    if let Err(e) = run(args) {
        tracing::error!("{e}");
        eprintln!("error: {e}");
        process::exit(e.exit_code());
    }
}
