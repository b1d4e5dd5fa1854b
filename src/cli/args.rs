use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "capimg", version, about = "Cap-inset (9-patch) detector and generator")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Detect repeated row/column runs and suggest cap insets
    Detect {
        /// Image files or glob patterns (~ is expanded)
        #[arg(required = true, value_name = "FILE")]
        source_file: Vec<String>,

        /// Emit detection reports as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Enable logging
        #[arg(long, default_value_t = false)]
        log: bool,
    },
    /// Slice images into minimal stretchable assets
    Gen {
        /// Image files or glob patterns (~ is expanded)
        #[arg(required = true, value_name = "FILE")]
        source_file: Vec<String>,

        /// Explicit cap insets in logical units (detected when omitted)
        #[arg(
            short = 'c',
            long = "capinsets",
            num_args = 4,
            value_names = ["TOP", "LEFT", "BOTTOM", "RIGHT"]
        )]
        capinsets: Option<Vec<u32>>,

        /// Target directory for generated files
        #[arg(short = 't', long = "target-directory", default_value = ".")]
        target_directory: PathBuf,

        /// Enable logging
        #[arg(long, default_value_t = false)]
        log: bool,
    },
}
