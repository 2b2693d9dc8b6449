// Rust guideline compliant 2026-10-16

//! Kanban CLI Application
//!
//! Command-line presentation layer for the three-column kanban board.

use clap::Parser;
use kanban_app::workspace::WORKSPACE_DIR;
use kanban_app::AppError;
use kanban_cli::commands::{self, Context};
use kanban_cli::{create_formatter, logging, should_use_color};
use kanban_core::{ColumnId, Config, Direction};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "kb",
    version,
    about = "A three-column kanban board stored next to your project",
    after_help = "Examples:\n  kb init\n  kb add todo\n  kb rename 1 \"Zakupy\"\n  kb move 1 right\n  kb sort doing\n  kb show --json\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Workspace root (defaults to the current directory)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ColumnArg {
    Todo,
    Doing,
    Done,
}

impl From<ColumnArg> for ColumnId {
    fn from(arg: ColumnArg) -> Self {
        match arg {
            ColumnArg::Todo => ColumnId::Todo,
            ColumnArg::Doing => ColumnId::Doing,
            ColumnArg::Done => ColumnId::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum DirectionArg {
    Left,
    Right,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Left => Direction::Left,
            DirectionArg::Right => Direction::Right,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a kanban board in the workspace
    Init,

    /// Show the board
    Show,

    /// Add a card to the end of a column
    Add {
        /// Target column
        #[arg(value_enum)]
        column: ColumnArg,
    },

    /// Remove a card
    Remove {
        /// Card ID
        id: u64,
    },

    /// Move a card one column left or right
    Move {
        /// Card ID
        id: u64,

        /// Direction
        #[arg(value_enum)]
        direction: DirectionArg,
    },

    /// Set a card title (surrounding whitespace is trimmed)
    Rename {
        /// Card ID
        id: u64,

        /// New title
        title: String,
    },

    /// Give a card a new pastel color
    Color {
        /// Card ID
        id: u64,
    },

    /// Give every card in a column a new pastel color
    Colorize {
        /// Target column
        #[arg(value_enum)]
        column: ColumnArg,
    },

    /// Sort a column by title
    Sort {
        /// Target column
        #[arg(value_enum)]
        column: ColumnArg,
    },

    /// Check the stored board for inconsistencies
    Check,

    /// Discard the stored board and start from an empty one
    Reset,
}

/// Loads configuration for `root`, using defaults when no workspace exists yet.
fn load_config(root: Option<&Path>) -> Result<Config, AppError> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir()?,
    };
    Ok(Config::load(&root.join(WORKSPACE_DIR))?)
}

fn run(command: Option<Commands>, ctx: &Context<'_>) -> anyhow::Result<ExitCode> {
    match command {
        Some(Commands::Init) => commands::init::execute(ctx)?,
        Some(Commands::Show) => commands::show::execute(ctx)?,
        Some(Commands::Add { column }) => commands::card::add(ctx, column.into())?,
        Some(Commands::Remove { id }) => commands::card::remove(ctx, id)?,
        Some(Commands::Move { id, direction }) => {
            commands::card::move_card(ctx, id, direction.into())?
        }
        Some(Commands::Rename { id, title }) => commands::card::rename(ctx, id, title)?,
        Some(Commands::Color { id }) => commands::card::color(ctx, id)?,
        Some(Commands::Colorize { column }) => commands::column::colorize(ctx, column.into())?,
        Some(Commands::Sort { column }) => commands::column::sort(ctx, column.into())?,
        Some(Commands::Check) => {
            if !commands::check::execute(ctx)?.is_healthy() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Reset) => commands::reset::execute(ctx)?,
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, config_error) = match load_config(cli.dir.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    logging::init_logging(cli.log_level.as_deref().unwrap_or(&config.log_level));

    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None if cli.json => "json",
        None => match config.output_format {
            kanban_core::OutputFormat::Json => "json",
            kanban_core::OutputFormat::Table => "table",
            kanban_core::OutputFormat::Plain => "plain",
        },
    };
    let formatter = create_formatter(format, use_color, &config.default_title);

    let ctx = Context {
        root: cli.dir.as_deref(),
        formatter: formatter.as_ref(),
        use_color,
    };

    let result = match config_error {
        Some(err) => Err(err.into()),
        None => run(cli.command, &ctx),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            if formatter.is_structured() {
                println!("{}", formatter.format_error(&err));
            } else {
                eprintln!("{}", formatter.format_error(&err));
            }
            ExitCode::FAILURE
        }
    }
}
