use crate::breadcrumb::NavLineRewriter;
use crate::config::Settings;
use crate::document::{Document, LineBuffer};
use crate::error::{NavError, NavResult};
use crate::index::DailyNoteIndex;
use crate::neighbor::{find_next, find_previous};
use crate::note::{NoteRepository, Vault};
use log::{debug, info};
use std::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    UpToDate(String),
    Rewritten { old: String, new: String },
}

impl FixOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, FixOutcome::Rewritten { .. })
    }
}

/// Build the daily note index from everything the repository knows.
pub fn load_index<R: NoteRepository + ?Sized>(
    repo: &R,
    folder: &str,
) -> Result<DailyNoteIndex, Box<dyn Error>> {
    let notes = repo.notes()?;
    debug!("repository returned {} notes", notes.len());
    Ok(DailyNoteIndex::build(&notes, folder))
}

/// Recompute the breadcrumb stored at `line_no` of `buf`. Neighbors are
/// resolved around `note_path` itself, so a pointer that is already right
/// stays put. The buffer is only touched when `write` is set and the rewrite
/// succeeded.
pub fn fix_buffer<B: LineBuffer>(
    buf: &mut B,
    note_path: &str,
    line_no: usize,
    index: &DailyNoteIndex,
    rewriter: &NavLineRewriter,
    write: bool,
) -> NavResult<FixOutcome> {
    let line = buf
        .line(line_no)
        .ok_or_else(|| NavError::MissingLine {
            line: line_no,
            path: note_path.to_string(),
        })?
        .to_string();

    if rewriter.is_current(&line, note_path, index)? {
        return Ok(FixOutcome::UpToDate(line));
    }
    let anchored = rewriter.anchor(&line, note_path)?;
    let new = rewriter.rewrite(&anchored, index)?;
    if new == line {
        return Ok(FixOutcome::UpToDate(line));
    }
    if write {
        buf.set_line(line_no, &new);
    }
    Ok(FixOutcome::Rewritten { old: line, new })
}

/// Fix (or with `write == false`, check) the breadcrumb of one note on disk.
pub fn fix_note(
    settings: &Settings,
    note_path: &str,
    write: bool,
) -> Result<FixOutcome, Box<dyn Error>> {
    let vault = Vault::new(&settings.vault);
    let file = vault.resolve(note_path);
    if !file.is_file() {
        return Err(format!("Note {note_path} not found").into());
    }
    let index = load_index(&vault, &settings.folder)?;
    let rewriter = NavLineRewriter::new(&settings.folder);
    let mut doc = Document::load(&file)?;

    let outcome = fix_buffer(&mut doc, note_path, settings.line, &index, &rewriter, write)?;
    if write && outcome.changed() {
        doc.save()?;
        info!("rewrote breadcrumb in {}", doc.path().display());
    }
    Ok(outcome)
}

/// A daily note with its true neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborRow {
    pub path: String,
    pub previous: Option<String>,
    pub next: Option<String>,
}

pub fn neighbor_rows(index: &DailyNoteIndex) -> Vec<NeighborRow> {
    index
        .paths()
        .iter()
        .map(|path| NeighborRow {
            path: path.clone(),
            previous: find_previous(index, path).map(str::to_string),
            next: find_next(index, path).map(str::to_string),
        })
        .collect()
}

/// A breadcrumb linking `note_path` to its neighbors. The newest note links
/// forward to itself.
pub fn fresh_line(
    index: &DailyNoteIndex,
    rewriter: &NavLineRewriter,
    note_path: &str,
    label: &str,
) -> NavResult<String> {
    let prev = find_previous(index, note_path)
        .ok_or_else(|| NavError::NoPreviousNote(note_path.to_string()))?;
    let next = find_next(index, note_path).unwrap_or(note_path);
    Ok(rewriter.compose(prev, label, next))
}
