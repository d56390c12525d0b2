use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for dayaxis
#[derive(Parser)]
#[command(
    name = "dayaxis",
    version = env!("CARGO_PKG_VERSION"),
    about = "Lay out calendar events on a weekly grid: pixel positions, snapping, sizing and drag & drop",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Disable ANSI colors in the grid and the layout table
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Run in test mode (no config file written by init)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which week to show and where the events come from.
#[derive(Args, Debug, Clone)]
pub struct WeekArgs {
    /// Events JSON file (defaults to `events_file` from the config)
    #[arg(long = "file", short = 'f', value_name = "FILE")]
    pub file: Option<String>,

    /// Any day of the week to show (YYYY-MM-DD); default: today
    #[arg(long = "week", short = 'w', value_name = "DATE")]
    pub week: Option<String>,

    /// Move by N weeks from --week (negative = previous weeks)
    #[arg(long = "offset", default_value_t = 0, allow_hyphen_values = true)]
    pub offset: i64,

    /// Split events that continue past midnight into per-day segments
    #[arg(long = "split")]
    pub split: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and an empty events file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration file for missing or unknown fields")]
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

    /// Position a single event on the day axis
    Position {
        /// Start timestamp (YYYY-MM-DDTHH:MM[:SS])
        #[arg(long = "start")]
        start: String,

        /// End timestamp (YYYY-MM-DDTHH:MM[:SS])
        #[arg(long = "end")]
        end: String,

        /// Day column height in pixels (default: derived from the default container)
        #[arg(long = "height")]
        height: Option<f64>,

        /// Round the top to the drag snap grid
        #[arg(long = "snapped")]
        snapped: bool,
    },

    /// Show the pixel layout of a week as a table
    Layout {
        #[command(flatten)]
        week: WeekArgs,

        /// Measured container height in pixels
        #[arg(long = "container")]
        container: Option<f64>,

        /// Round tops to the drag snap grid
        #[arg(long = "snapped")]
        snapped: bool,

        /// Only show one day (name, 3-letter abbreviation or 0-6)
        #[arg(long = "day")]
        day: Option<String>,
    },

    /// Draw a week as a text grid
    Grid {
        #[command(flatten)]
        week: WeekArgs,
    },

    /// Export the layout of a week
    Export {
        #[command(flatten)]
        week: WeekArgs,

        /// Export format (default: from the output file extension)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file path (absolute path required)
        #[arg(long = "out", value_name = "FILE")]
        out: String,

        /// Measured container height in pixels
        #[arg(long = "container")]
        container: Option<f64>,

        /// Overwrite output file without confirmation
        #[arg(long = "force")]
        force: bool,
    },

    /// Compute slot and column heights for a container
    Sizing {
        /// Measured container height in pixels
        #[arg(long = "container")]
        container: f64,

        /// Container width in pixels (default: week_width from the config)
        #[arg(long = "width")]
        width: Option<f64>,
    },

    /// Convert a click inside a day column into a start time
    Slot {
        /// Day column (name, 3-letter abbreviation or 0-6)
        #[arg(long = "day")]
        day: String,

        /// Vertical click offset in pixels from the top of the column
        #[arg(long = "y")]
        y: f64,

        /// Any day of the week (YYYY-MM-DD); default: today
        #[arg(long = "week", short = 'w')]
        week: Option<String>,

        /// Measured container height in pixels
        #[arg(long = "container")]
        container: Option<f64>,
    },

    /// Preview rescheduling an event by dropping it on the grid
    Drop {
        /// Id of the event to move
        #[arg(long = "id")]
        id: i64,

        /// Horizontal drop offset in pixels from the left of the grid
        #[arg(long = "x")]
        x: f64,

        /// New top of the event block in pixels
        #[arg(long = "top")]
        top: f64,

        /// Events JSON file (defaults to `events_file` from the config)
        #[arg(long = "file", short = 'f')]
        file: Option<String>,

        /// Any day of the displayed week (YYYY-MM-DD); default: today
        #[arg(long = "week", short = 'w')]
        week: Option<String>,

        /// Measured container height in pixels
        #[arg(long = "container")]
        container: Option<f64>,

        /// Write the rescheduled event back to the events file
        #[arg(long = "apply")]
        apply: bool,
    },
}
