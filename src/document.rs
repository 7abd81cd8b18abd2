use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Line-addressable text, zero-based.
pub trait LineBuffer {
    fn line(&self, n: usize) -> Option<&str>;
    fn set_line(&mut self, n: usize, text: &str) -> bool;
}

/// A note file held in memory as lines.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
    line_ending: &'static str,
    trailing_newline: bool,
}

impl Document {
    pub fn load(path: &Path) -> io::Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(Self::from_text(path, &raw))
    }

    pub fn from_text(path: &Path, raw: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: raw.lines().map(str::to_string).collect(),
            line_ending: if raw.contains("\r\n") { "\r\n" } else { "\n" },
            trailing_newline: raw.ends_with('\n'),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> String {
        let mut out = self.lines.join(self.line_ending);
        if self.trailing_newline {
            out.push_str(self.line_ending);
        }
        out
    }

    pub fn save(&self) -> io::Result<()> {
        fs::write(&self.path, self.text())
    }
}

impl LineBuffer for Document {
    fn line(&self, n: usize) -> Option<&str> {
        self.lines.get(n).map(String::as_str)
    }

    fn set_line(&mut self, n: usize, text: &str) -> bool {
        match self.lines.get_mut(n) {
            Some(slot) => {
                *slot = text.to_string();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_line_keeps_other_lines() {
        let mut doc = Document::from_text(Path::new("n.md"), "# Title\nold\nbody\n");
        assert!(doc.set_line(1, "new"));
        assert_eq!(doc.text(), "# Title\nnew\nbody\n");
        assert!(!doc.set_line(5, "nope"));
    }

    #[test]
    fn test_no_trailing_newline_preserved() {
        let doc = Document::from_text(Path::new("n.md"), "a\nb");
        assert_eq!(doc.text(), "a\nb");
        assert_eq!(doc.line(1), Some("b"));
        assert_eq!(doc.line(2), None);
    }

    #[test]
    fn test_crlf_endings_survive_line_edit() {
        let mut doc = Document::from_text(Path::new("n.md"), "a\r\nb\r\nc\r\n");
        assert_eq!(doc.line(1), Some("b"));
        doc.set_line(1, "B");
        assert_eq!(doc.text(), "a\r\nB\r\nc\r\n");

        let doc = Document::from_text(Path::new("n.md"), "a\r\nb");
        assert_eq!(doc.text(), "a\r\nb");
    }

    #[test]
    fn test_save_round_trips_to_disk() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("n.md");
        fs::write(&path, "one\ntwo\n").unwrap();
        let mut doc = Document::load(&path).unwrap();
        doc.set_line(0, "uno");
        doc.save().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "uno\ntwo\n");
    }
}
