//! Copy actions over the current view.
//!
//! Clipboard failures never reach the caller as errors: each action settles into a
//! [`Notice`] and logs the underlying cause.

use log::{debug, warn};
use roster_clipboard::ClipboardProvider;

use crate::error::RosterError;
use crate::notice::Notice;
use crate::record::UserRecord;

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";

/// Separator between emails in a copy-all payload.
pub const EMAIL_SEPARATOR: &str = ", ";

/// All emails of `view`, in view order.
pub fn emails_payload(view: &[&UserRecord]) -> Result<String, RosterError> {
    if view.is_empty() {
        return Err(RosterError::EmptyCopy);
    }
    Ok(view
        .iter()
        .map(|record| record.email.as_str())
        .collect::<Vec<_>>()
        .join(EMAIL_SEPARATOR))
}

/// Writes `text` to the clipboard and reports the outcome.
pub fn copy_text<C>(clipboard: &C, text: &str) -> Notice
where
    C: ClipboardProvider + ?Sized,
{
    match clipboard.set_text(text) {
        Ok(()) => {
            debug!("copied {} characters", text.chars().count());
            Notice::success(COPIED_MESSAGE)
        }
        Err(e) => {
            warn!("Failed to copy: {e}");
            RosterError::Clipboard(e.to_string()).notice()
        }
    }
}

/// Copy-all: every email of the view, or a "no emails" notice when empty.
pub fn copy_all<C>(view: &[&UserRecord], clipboard: &C) -> Notice
where
    C: ClipboardProvider + ?Sized,
{
    match emails_payload(view) {
        Ok(payload) => copy_text(clipboard, &payload),
        Err(e) => e.notice(),
    }
}

/// Copies one record's email.
pub fn copy_email<C>(record: &UserRecord, clipboard: &C) -> Notice
where
    C: ClipboardProvider + ?Sized,
{
    copy_text(clipboard, &record.email)
}
