//! Wiki-style link references: `[[<path-without-extension>|<display>]]`.

use crate::config::NOTE_EXT;
use crate::error::{NavError, NavResult};
use log::trace;

pub const BACK_GLYPH: &str = "««";
pub const FORWARD_GLYPH: &str = "»»";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// Parses and renders the navigation links of a breadcrumb.
#[derive(Debug, Clone)]
pub struct LinkCodec {
    folder_prefix: String,
    ext_suffix: String,
}

impl LinkCodec {
    pub fn new(folder: &str) -> Self {
        Self {
            folder_prefix: format!("{folder}/"),
            ext_suffix: format!(".{NOTE_EXT}"),
        }
    }

    /// Extract the note path a link points at. The display text after the
    /// first `|` is ignored and the extension is appended to the target.
    pub fn parse(&self, link: &str) -> NavResult<String> {
        let malformed = || NavError::MalformedLink(link.to_string());
        let inner = link
            .trim()
            .strip_prefix("[[")
            .and_then(|rest| rest.strip_suffix("]]"))
            .ok_or_else(malformed)?;
        if inner.contains("[[") || inner.contains("]]") {
            return Err(malformed());
        }
        let target = inner.split('|').next().unwrap_or_default().trim();
        if target.is_empty() || target.ends_with(&self.ext_suffix) {
            return Err(malformed());
        }
        trace!("link {link} targets {target}");
        Ok(format!("{target}{}", self.ext_suffix))
    }

    pub fn render(&self, path: &str, direction: Direction) -> String {
        let stem = path.strip_suffix(&self.ext_suffix).unwrap_or(path);
        let token = stem.strip_prefix(&self.folder_prefix).unwrap_or(stem);
        let label = match direction {
            Direction::Back => format!("{BACK_GLYPH} {token}"),
            Direction::Forward => format!("{token} {FORWARD_GLYPH}"),
        };
        format!("[[{stem}|{label}]]")
    }
}
