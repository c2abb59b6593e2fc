//! Text Helper - preview, transform and convert plain-text files
//!
//! The core is a set of pure string functions (`util`, `format`,
//! `timestamp`). A session layer following the Elm Architecture pattern
//! (`model`, `messages`, `update`, `commands`) keeps the current document
//! as an explicit value.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod format;
pub mod messages;
pub mod model;
pub mod timestamp;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::HelperConfig;
pub use format::{convert_text_for_format, ConvertedFile, OutputFormat};
pub use messages::Msg;
pub use model::{OpenMode, Session};
pub use timestamp::{make_timestamp, Clock, FixedClock, SystemClock};
