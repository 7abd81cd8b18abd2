use crate::error::{NavError, NavResult};
use crate::index::DailyNoteIndex;
use crate::link::{Direction, LinkCodec};
use crate::neighbor::{find_next, find_previous};
use log::debug;

pub const SEPARATOR: &str = " | ";

/// Recomputes the previous/next links of a breadcrumb line.
#[derive(Debug, Clone)]
pub struct NavLineRewriter {
    codec: LinkCodec,
}

impl NavLineRewriter {
    pub fn new(folder: &str) -> Self {
        Self { codec: LinkCodec::new(folder) }
    }

    /// Replace both stale pointers with the nearest existing daily notes.
    /// A missing previous note aborts; a missing next note keeps the stale
    /// next pointer.
    pub fn rewrite(&self, line: &str, index: &DailyNoteIndex) -> NavResult<String> {
        let [prev_text, label, next_text] = split(line)?;
        let stale_prev = self.codec.parse(prev_text)?;
        let stale_next = self.codec.parse(next_text)?;

        let new_prev = find_previous(index, &stale_prev)
            .ok_or_else(|| NavError::NoPreviousNote(stale_prev.clone()))?;
        let new_next = match find_next(index, &stale_next) {
            Some(next) => next,
            None => {
                debug!("no note after {stale_next}, keeping it");
                stale_next.as_str()
            }
        };
        debug!("previous {stale_prev} -> {new_prev}, next {stale_next} -> {new_next}");

        Ok(self.compose(new_prev, label, new_next))
    }

    /// Whether `line` already links `note` to its true neighbors. When `note`
    /// is the newest daily note any next pointer with no successor counts.
    pub fn is_current(&self, line: &str, note: &str, index: &DailyNoteIndex) -> NavResult<bool> {
        let [prev_text, _, next_text] = split(line)?;
        let prev = self.codec.parse(prev_text)?;
        let next = self.codec.parse(next_text)?;
        let prev_ok = find_previous(index, note) == Some(prev.as_str());
        let next_ok = match find_next(index, note) {
            Some(expected) => expected == next,
            None => next.as_str() >= note && find_next(index, &next).is_none(),
        };
        Ok(prev_ok && next_ok)
    }

    /// Validate a stored line and rebuild it with both pointers on `note`, so
    /// `rewrite` resolves the note's own neighbors instead of stepping past
    /// whatever the line currently links to. The label is kept.
    pub fn anchor(&self, line: &str, note: &str) -> NavResult<String> {
        let [prev_text, label, next_text] = split(line)?;
        self.codec.parse(prev_text)?;
        self.codec.parse(next_text)?;
        Ok(self.compose(note, label, note))
    }

    /// Render a breadcrumb line from explicit neighbor paths.
    pub fn compose(&self, prev: &str, label: &str, next: &str) -> String {
        [
            self.codec.render(prev, Direction::Back),
            label.to_string(),
            self.codec.render(next, Direction::Forward),
        ]
        .join(SEPARATOR)
    }
}

fn split(line: &str) -> NavResult<[&str; 3]> {
    let segments: Vec<&str> = line.split(SEPARATOR).collect();
    match segments.as_slice() {
        [prev, label, next] => Ok([*prev, *label, *next]),
        _ => Err(NavError::MalformedBreadcrumb { segments: segments.len() }),
    }
}
