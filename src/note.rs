use crate::config::NOTE_EXT;
use chrono::{Local, NaiveDate};
use log::trace;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DATE_FMT: &str = "%Y-%m-%d";

/// A note known to the vault. `path` is vault-relative and `/`-delimited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub path: String,
    pub parent_folder_name: String,
}

impl Note {
    pub fn new(path: &str) -> Self {
        let parent_folder_name = path
            .rsplit_once('/')
            .map(|(dir, _)| dir.rsplit('/').next().unwrap_or(dir))
            .unwrap_or_default()
            .to_string();
        Self { path: path.to_string(), parent_folder_name }
    }
}

/// Anything able to enumerate every note it knows about.
pub trait NoteRepository {
    fn notes(&self) -> io::Result<Vec<Note>>;
}

impl NoteRepository for [Note] {
    fn notes(&self) -> io::Result<Vec<Note>> {
        Ok(self.to_vec())
    }
}

impl NoteRepository for Vec<Note> {
    fn notes(&self) -> io::Result<Vec<Note>> {
        self.as_slice().notes()
    }
}

/// A directory of Markdown notes on disk.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a vault-relative note path.
    pub fn resolve(&self, path: &str) -> PathBuf {
        path.split('/').fold(self.root.clone(), |acc, part| acc.join(part))
    }

    fn walk(&self, dir: &Path, prefix: &str, out: &mut Vec<Note>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.starts_with('.') {
                trace!("skipping hidden entry {}", entry.path().display());
                continue;
            }
            let rel = if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}/{name}")
            };
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                self.walk(&entry.path(), &rel, out)?;
            } else if file_type.is_file()
                && entry.path().extension().and_then(|s| s.to_str()) == Some(NOTE_EXT)
            {
                out.push(Note::new(&rel));
            }
        }
        Ok(())
    }
}

impl NoteRepository for Vault {
    fn notes(&self) -> io::Result<Vec<Note>> {
        let mut notes = Vec::new();
        self.walk(&self.root, "", &mut notes)?;
        Ok(notes)
    }
}

/// `<folder>/<YYYY-MM-DD>.md` for the given day.
pub fn daily_note_path(folder: &str, date: NaiveDate) -> String {
    format!("{folder}/{}.{NOTE_EXT}", date.format(DATE_FMT))
}

pub fn today_note_path(folder: &str) -> String {
    daily_note_path(folder, Local::now().date_naive())
}

/// Turn a user-supplied note reference into a vault-relative path.
/// Bare stems such as `2024-01-05` resolve inside the daily folder.
pub fn resolve_note_arg(arg: &str, folder: &str) -> String {
    let trimmed = arg.trim().trim_start_matches("./");
    let with_ext = if trimmed.ends_with(&format!(".{NOTE_EXT}")) {
        trimmed.to_string()
    } else {
        format!("{trimmed}.{NOTE_EXT}")
    };
    if with_ext.contains('/') {
        with_ext
    } else {
        format!("{folder}/{with_ext}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_note_parent_folder() {
        assert_eq!(Note::new("Daily/2024-01-01.md").parent_folder_name, "Daily");
        assert_eq!(
            Note::new("Archive/Daily/2023-12-31.md").parent_folder_name,
            "Daily"
        );
        assert_eq!(Note::new("README.md").parent_folder_name, "");
    }

    #[test]
    fn test_vault_walk_skips_hidden_and_other_files() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("Daily")).unwrap();
        fs::create_dir_all(tmp.path().join(".obsidian")).unwrap();
        fs::write(tmp.path().join("Daily/2024-01-01.md"), "x").unwrap();
        fs::write(tmp.path().join("Daily/image.png"), "x").unwrap();
        fs::write(tmp.path().join(".obsidian/app.md"), "x").unwrap();
        fs::write(tmp.path().join("Inbox.md"), "x").unwrap();

        let mut notes = Vault::new(tmp.path()).notes().unwrap();
        notes.sort_by(|a, b| a.path.cmp(&b.path));
        assert_eq!(
            notes,
            vec![Note::new("Daily/2024-01-01.md"), Note::new("Inbox.md")]
        );
    }

    #[test]
    fn test_daily_note_path() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(daily_note_path("Daily", date), "Daily/2024-03-09.md");
    }

    #[test]
    fn test_resolve_note_arg() {
        assert_eq!(resolve_note_arg("2024-01-05", "Daily"), "Daily/2024-01-05.md");
        assert_eq!(resolve_note_arg("2024-01-05.md", "Daily"), "Daily/2024-01-05.md");
        assert_eq!(resolve_note_arg("Work/plan", "Daily"), "Work/plan.md");
    }
}
