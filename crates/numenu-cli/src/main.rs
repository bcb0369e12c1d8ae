//! numenu - run, inspect and create numbered console menus.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use numenu_cli::{config, logging, runner};
use numenu_core::{Menu, MenuParts, TokenReader};
use std::io::Write;
use std::path::PathBuf;

use config::Config;
use logging::{LogConfig, LogFormat};
use runner::{run_menu, RunOptions};

/// numenu - numbered console menus from JSON files.
#[derive(Parser, Debug)]
#[command(name = "numenu")]
#[command(about = "Run, inspect and create numbered console menus")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (INFO level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug logging (DEBUG level)
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable trace logging (TRACE level for everything)
    #[arg(long, global = true)]
    trace: bool,

    /// Quiet mode (ERROR only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Set log level for specific targets (e.g., "input=trace" or "persist=debug")
    /// Can be specified multiple times. Targets are prefixed with "numenu::" automatically.
    #[arg(long = "log", value_name = "TARGET=LEVEL", global = true)]
    log_overrides: Vec<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a menu
    Show {
        /// Menu file
        menu: PathBuf,
        /// Show chosen/unchosen labels
        #[arg(long)]
        completion: bool,
    },
    /// Check a menu file and report the first structural problem
    Validate {
        /// Menu file
        menu: PathBuf,
    },
    /// Run a menu interactively on stdin/stdout
    Run {
        /// Menu file
        menu: PathBuf,
        #[command(flatten)]
        flags: RunFlags,
    },
    /// Run the built-in demonstration menu
    Demo {
        #[command(flatten)]
        flags: RunFlags,
    },
    /// Create a menu file
    New {
        /// Destination file
        menu: PathBuf,
        /// Menu title
        #[arg(long, default_value = "")]
        title: String,
        /// Option label (repeat for each option, in display order)
        #[arg(long = "option", value_name = "LABEL")]
        options: Vec<String>,
        /// Number that selects exit; enables the exit line
        #[arg(long, allow_negative_numbers = true)]
        exit_on: Option<i64>,
        /// Label of the exit line
        #[arg(long, default_value = "Exit")]
        exit_text: String,
        /// Label for options that have been chosen
        #[arg(long)]
        chosen_text: Option<String>,
        /// Label for options that have not been chosen
        #[arg(long)]
        unchosen_text: Option<String>,
    },
}

#[derive(clap::Args, Debug, Clone, Copy)]
struct RunFlags {
    /// Mark options as chosen when selected
    #[arg(long)]
    track: bool,
    /// Show chosen/unchosen labels next to options
    #[arg(long)]
    show_completion: bool,
    /// Refuse to exit until every option has been chosen (implies --track)
    #[arg(long)]
    require_complete: bool,
}

impl RunFlags {
    /// Flags only switch behavior on; config values stay in effect otherwise.
    fn apply(self, mut options: RunOptions) -> RunOptions {
        options.track_completion |= self.track || self.require_complete;
        options.show_completion |= self.show_completion;
        options.require_complete_to_exit |= self.require_complete;
        options
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_cli(
        cli.verbose,
        cli.debug,
        cli.trace,
        cli.quiet,
        cli.log_overrides,
        cli.log_format,
    );
    logging::init(&log_config);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load()?,
    };
    tracing::debug!(target: "numenu::startup", "Loaded configuration: {:?}", config);

    match cli.command {
        Command::Show { menu, completion } => {
            let path = config.resolve_menu_path(&menu);
            let menu = Menu::load_from(&path)?;
            print!("{}", menu.render(completion || config.show_completion));
        }
        Command::Validate { menu } => {
            let path = config.resolve_menu_path(&menu);
            let menu = Menu::load_from(&path)?;
            println!(
                "{}: valid ({} options, exit {})",
                path.display(),
                menu.num_options(),
                if menu.is_exit_allowed() {
                    format!("on {}", menu.exit_on())
                } else {
                    "disabled".to_string()
                }
            );
        }
        Command::Run { menu, flags } => {
            let path = config.resolve_menu_path(&menu);
            let mut menu = Menu::load_from(&path)?;
            interact(&mut menu, flags.apply(RunOptions::from_config(&config)))?;
        }
        Command::Demo { flags } => {
            let mut menu = Menu::demo();
            interact(&mut menu, flags.apply(RunOptions::from_config(&config)))?;
        }
        Command::New {
            menu,
            title,
            options,
            exit_on,
            exit_text,
            chosen_text,
            unchosen_text,
        } => {
            let created = Menu::from_parts(MenuParts {
                title,
                num_options: None,
                options,
                exit_allowed: exit_on.is_some(),
                exit_on: exit_on.unwrap_or(0),
                exit_text: Some(exit_text),
                chosen_text,
                unchosen_text,
            })?;
            created.save_to(&menu)?;
            println!("Wrote {} ({} options)", menu.display(), created.num_options());
        }
    }

    Ok(())
}

fn interact(menu: &mut Menu, options: RunOptions) -> Result<()> {
    let mut input = TokenReader::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let summary = run_menu(menu, &mut input, &mut out, options)?;
    if options.track_completion {
        writeln!(
            out,
            "Chose {} of {} options.",
            menu.count_chosen(),
            menu.num_options()
        )?;
    }
    tracing::debug!(target: "numenu::run", "Run summary: {:?}", summary);
    Ok(())
}
