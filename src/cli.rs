//! Command-line interface definition using clap.
//!
//! [`Args`] is the argument structure of the `chatsplit` binary. It is kept
//! in the library so the option-to-config mapping can be tested without
//! spawning a process.
//!
//! ```rust
//! use clap::Parser;
//! use chatsplit::cli::Args;
//! use chatsplit::format::OutputFormat;
//!
//! let args = Args::parse_from(["chatsplit", "chat.txt", "-f", "csv"]);
//! assert_eq!(args.output_format(), OutputFormat::Csv);
//! assert_eq!(args.output_path(), "results.csv");
//!
//! let args = Args::parse_from(["chatsplit", "chat.txt", "-o", "out.jsonl"]);
//! assert_eq!(args.output_format(), OutputFormat::Jsonl);
//! ```

use clap::Parser;

use crate::config::{OutputConfig, TranscriptConfig};
use crate::format::OutputFormat;

/// Default output path when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "results.json";

/// Split a plain-text chat transcript into datetime/author/message records.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsplit")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsplit chat.txt
    chatsplit chat.txt -o messages.csv -f csv
    chatsplit chat.txt --authors --stats
    chatsplit results.json --load --view Alice")]
pub struct Args {
    /// Path to the transcript (or, with --load, a results file)
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format [default: from the output extension, else json]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Treat INPUT as a previously written JSON results file; nothing is written
    #[arg(long)]
    pub load: bool,

    /// Print the distinct authors
    #[arg(short, long)]
    pub authors: bool,

    /// Print the chat as seen by AUTHOR
    #[arg(long, value_name = "AUTHOR")]
    pub view: Option<String>,

    /// Column width used to right-align own messages in --view
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Keep line breaks inside multi-line messages
    #[arg(long)]
    pub keep_line_breaks: bool,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Print per-reason skip statistics
    #[arg(long)]
    pub stats: bool,

    /// Log every skipped chunk to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Extraction rules selected by the flags.
    pub fn transcript_config(&self) -> TranscriptConfig {
        TranscriptConfig::new().with_collapse_line_breaks(!self.keep_line_breaks)
    }

    /// Output layout selected by the flags.
    pub fn output_config(&self) -> OutputConfig {
        if self.compact {
            OutputConfig::new().compact()
        } else {
            OutputConfig::new()
        }
    }

    /// Returns the selected format: `--format` if given, otherwise the one
    /// matching the output extension, otherwise JSON.
    pub fn output_format(&self) -> OutputFormat {
        match self.format {
            Some(format) => format,
            None => OutputFormat::from_path(&self.output).unwrap_or_default(),
        }
    }

    /// Returns the output path, matching the default name's extension to
    /// the selected format.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        format!("results.{}", self.output_format().extension())
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
