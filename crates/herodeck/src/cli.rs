use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "herodeck")]
#[command(author, version, about)]
#[command(long_about = "React Zero to Hero: an interactive slide deck course.\n\n\
    Every slide has a simple and an advanced explanation; press M to switch.\n\n\
    Examples:\n  \
    herodeck                     Launch the course (fullscreen)\n  \
    herodeck --windowed          Launch in a window\n  \
    herodeck --slide 6           Open on the sixth slide\n  \
    herodeck list                Print the table of contents")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Start on the slide with this id (see `herodeck list`)
    #[arg(long, global = false, conflicts_with = "slide")]
    pub topic: Option<String>,

    /// Start in advanced mode
    #[arg(long, global = false)]
    pub advanced: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Export slides as PNG images
    Export {
        /// Output directory for PNG files
        #[arg(short, long, default_value = "export")]
        output_dir: PathBuf,

        /// Export width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Export height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,

        /// Which explanation to render
        #[arg(long, value_enum, default_value = "simple")]
        mode: ModeArg,
    },

    /// Print the slides in order
    List,

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.transition, defaults.start_slide)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    Simple,
    Advanced,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Export {
                output_dir,
                width,
                height,
                mode,
            }) => crate::commands::export::run(output_dir, width, height, mode),
            Some(Commands::List) => crate::commands::list::run(),
            Some(Commands::Version) => {
                crate::banner::print_banner_with_version();
                Ok(())
            }
            None => crate::app::run(crate::app::LaunchOptions {
                windowed: self.windowed,
                start_slide: self.slide,
                topic: self.topic,
                advanced: self.advanced,
            }),
        }
    }
}
