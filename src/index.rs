use crate::note::Note;
use log::debug;

/// Daily note paths in ascending order. Lexicographic order is date order
/// because daily notes are named `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyNoteIndex {
    paths: Vec<String>,
}

impl DailyNoteIndex {
    /// Keep notes whose parent folder is exactly `folder`, sorted by path.
    pub fn build(notes: &[Note], folder: &str) -> Self {
        let mut paths: Vec<String> = notes
            .iter()
            .filter(|n| n.parent_folder_name == folder)
            .map(|n| n.path.clone())
            .collect();
        paths.sort();
        paths.dedup();
        debug!("indexed {} daily notes in {folder}", paths.len());
        Self { paths }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.binary_search_by(|p| p.as_str().cmp(path)).is_ok()
    }
}
