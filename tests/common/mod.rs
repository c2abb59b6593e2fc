//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use chrono::NaiveDate;
use text_helper::commands::Cmd;
use text_helper::format::{ConvertedFile, OutputFormat};
use text_helper::messages::Msg;
use text_helper::model::{OpenMode, Session};
use text_helper::timestamp::FixedClock;
use text_helper::update::update;

/// The footer every save produces with [`fixed_clock`]
pub const FIXED_FOOTER: &str = "\n\nProcessed on: 2024-06-01 12:00:00";

/// Clock pinned to 2024-06-01 12:00:00
pub fn fixed_clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
}

/// Create a read-mode session over the given text, named "notes"
pub fn test_session(text: &str) -> Session {
    Session::new(text, "notes")
}

/// Create an append-mode session that saves in the given format
pub fn saving_session(text: &str, format: OutputFormat) -> Session {
    let mut session = test_session(text);
    session.mode = OpenMode::Append;
    session.format = format;
    session
}

/// Apply a message with the fixed clock
pub fn apply(session: &mut Session, msg: Msg) -> Option<Cmd> {
    update(session, msg, &fixed_clock())
}

/// Save and return the download, panicking if none was produced
pub fn save(session: &mut Session, extra: &str) -> ConvertedFile {
    match apply(
        session,
        Msg::Save {
            extra: extra.to_string(),
        },
    ) {
        Some(Cmd::Download(file)) => file,
        other => panic!("Expected a download, got {:?}", other),
    }
}
