//! Command-line argument parsing
//!
//! The flags stand in for the dashboard's buttons: each one becomes a
//! [`Msg`] applied to the session in a fixed order.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::format::OutputFormat;
use crate::messages::Msg;
use crate::model::OpenMode;

/// Preview, transform and convert plain-text files
#[derive(Parser, Debug)]
#[command(
    name = "text-helper",
    version,
    about = "Preview, transform and convert plain-text files"
)]
pub struct CliArgs {
    /// The .txt file to load
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Open mode; saving is only possible in append mode
    #[arg(short, long, value_enum, default_value_t = CliMode::Read)]
    pub mode: CliMode,

    /// Output format tag (.txt, .md, .html, .csv); unknown tags save as .txt
    #[arg(short, long, value_name = "TAG")]
    pub format: Option<String>,

    /// Uppercase the document
    #[arg(long)]
    pub upper: bool,

    /// Lowercase the document
    #[arg(long)]
    pub lower: bool,

    /// Trim every line and the document as a whole
    #[arg(long)]
    pub strip: bool,

    /// Replace OLD with NEW (repeatable, applied in order)
    #[arg(long, num_args = 2, value_names = ["OLD", "NEW"], action = clap::ArgAction::Append)]
    pub replace: Vec<String>,

    /// Count occurrences of a substring (repeatable)
    #[arg(long, value_name = "SUB")]
    pub count: Vec<String>,

    /// Print the first N lines, given as `--preview=N` (defaults to the configured preview size)
    #[arg(long, value_name = "N", require_equals = true)]
    pub preview: Option<Option<usize>>,

    /// Print line, word and character counts
    #[arg(long)]
    pub stats: bool,

    /// Save a converted copy of the document
    #[arg(short, long)]
    pub save: bool,

    /// Extra text appended before saving
    #[arg(long, value_name = "TEXT")]
    pub extra: Option<String>,

    /// Directory that receives saved files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliMode {
    Read,
    Append,
}

impl From<CliMode> for OpenMode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Read => OpenMode::Read,
            CliMode::Append => OpenMode::Append,
        }
    }
}

/// What a run should do, derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    /// Messages applied to the session, in order
    pub messages: Vec<Msg>,
}

impl CliArgs {
    /// Convert parsed arguments into the ordered list of session messages.
    ///
    /// Order: settings, case (upper then lower), strip, replaces, counts,
    /// preview, stats, save.
    pub fn into_plan(self) -> RunPlan {
        let mut messages = vec![Msg::SetMode(self.mode.into())];

        if let Some(tag) = &self.format {
            messages.push(Msg::SetFormat(OutputFormat::from_tag_or_txt(tag)));
        }

        if self.upper {
            messages.push(Msg::ToUpper);
        }
        if self.lower {
            messages.push(Msg::ToLower);
        }
        if self.strip {
            messages.push(Msg::Strip);
        }

        messages.extend(self.replace.chunks_exact(2).map(|pair| Msg::Replace {
            old: pair[0].clone(),
            new: pair[1].clone(),
        }));

        messages.extend(self.count.into_iter().map(Msg::Count));

        if let Some(size) = self.preview {
            // A bare `--preview` keeps the configured size
            if let Some(n) = size {
                messages.push(Msg::SetPreviewLines(n));
            }
            messages.push(Msg::Preview);
        }
        if self.stats {
            messages.push(Msg::Stats);
        }
        if self.save {
            messages.push(Msg::Save {
                extra: self.extra.unwrap_or_default(),
            });
        }

        RunPlan {
            input: self.input,
            out_dir: self.out_dir,
            messages,
        }
    }
}
