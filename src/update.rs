//! Update function for the Elm-style architecture
//!
//! All session state transformations flow through [`update`].

use crate::commands::{Cmd, SAVE_DISABLED_NOTICE};
use crate::format::{convert_text, ConvertedFile};
use crate::messages::Msg;
use crate::model::Session;
use crate::timestamp::{make_timestamp, Clock};
use crate::util::{
    count_substring, get_preview_lines, get_stats, replace_text, strip_text, to_lower, to_upper,
};

/// Apply one message to the session, returning what the host should show or do
pub fn update(session: &mut Session, msg: Msg, clock: &dyn Clock) -> Option<Cmd> {
    tracing::debug!(?msg, "update");

    match msg {
        Msg::ToUpper => {
            session.text = to_upper(&session.text);
            None
        }
        Msg::ToLower => {
            session.text = to_lower(&session.text);
            None
        }
        Msg::Strip => {
            session.text = strip_text(&session.text);
            None
        }
        Msg::Replace { old, new } => {
            if old.is_empty() {
                tracing::debug!("Ignoring replace with empty pattern");
                return None;
            }
            session.text = replace_text(&session.text, &old, &new);
            None
        }
        Msg::SetText(text) => {
            session.text = text;
            None
        }

        Msg::Count(needle) => {
            if needle.is_empty() {
                return None;
            }
            let count = count_substring(&session.text, &needle);
            Some(Cmd::ShowCount { needle, count })
        }
        Msg::Preview => {
            let lines = get_preview_lines(&session.text, session.preview_lines)
                .into_iter()
                .map(str::to_string)
                .collect();
            Some(Cmd::ShowPreview(lines))
        }
        Msg::Stats => Some(Cmd::ShowStats(get_stats(&session.text))),

        Msg::SetMode(mode) => {
            session.mode = mode;
            None
        }
        Msg::SetFormat(format) => {
            session.format = format;
            None
        }
        Msg::SetPreviewLines(n) => {
            session.preview_lines = n;
            None
        }

        Msg::Save { extra } => {
            if !session.mode.can_save() {
                return Some(Cmd::Notice(SAVE_DISABLED_NOTICE.to_string()));
            }
            let file = build_download(session, &extra, clock);
            tracing::info!(
                "Prepared {} ({} bytes)",
                file.filename,
                file.bytes.len()
            );
            Some(Cmd::Download(file))
        }
    }
}

/// The text a save produces: document, optional extra text, and footer.
///
/// The session's document is left untouched.
pub fn final_text(session: &Session, extra: &str, clock: &dyn Clock) -> String {
    let mut text = session.text.clone();
    if !extra.trim().is_empty() {
        text.push('\n');
        text.push_str(extra);
    }
    text.push_str("\n\nProcessed on: ");
    text.push_str(&make_timestamp(clock, &session.timestamp_format));
    text
}

fn build_download(session: &Session, extra: &str, clock: &dyn Clock) -> ConvertedFile {
    let text = final_text(session, extra, clock);
    convert_text(&text, &session.base_name, session.format)
}
