use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rWorkday
#[derive(Parser)]
#[command(
    name = "rworkday",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track a workday from clock-in/clock-out punches: worked time, breaks, 8-hour completion and overtime",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config_path: Option<String>,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the day's punches come from.
#[derive(Args, Debug, Clone, Default)]
pub struct PunchArgs {
    /// Punch sheet file (default: `punch_file` from the configuration)
    #[arg(long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// One session, e.g. "9:00 am - 1:00 pm"; repeat in order. End may be omitted or MISSING.
    #[arg(
        long = "punch",
        value_name = "SESSION",
        conflicts_with = "file",
        help = "Session \"START - END\" (repeatable, in order)"
    )]
    pub punches: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and an empty punch sheet
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or unknown fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show worked time, 8-hour completion, overtime and remaining time once
    Summary {
        #[command(flatten)]
        punches: PunchArgs,

        #[arg(long = "at", value_name = "TIME", help = "Evaluate at this time instead of now (e.g. \"5:00 pm\")")]
        at: Option<String>,

        #[arg(long = "json", help = "Print the summary as JSON")]
        json: bool,
    },

    /// Print only the time left until 8 hours (and the overtime, if any)
    Remaining {
        #[command(flatten)]
        punches: PunchArgs,

        #[arg(long = "at", value_name = "TIME", help = "Evaluate at this time instead of now")]
        at: Option<String>,
    },

    /// Show how a raw punch is read (24-hour clock)
    Parse {
        /// Raw punch, e.g. "2:30 pm"
        raw: String,
    },

    /// Keep tracking: re-render every minute and notify at checkpoints
    Watch {
        #[command(flatten)]
        punches: PunchArgs,

        #[arg(long = "json", help = "Emit one JSON summary per render")]
        json: bool,

        #[arg(long = "no-desktop", help = "Do not send desktop notifications")]
        no_desktop: bool,
    },

    /// List the remaining-time and overtime checkpoints
    Checkpoints,
}
