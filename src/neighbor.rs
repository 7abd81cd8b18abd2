use crate::index::DailyNoteIndex;

/// Greatest path strictly before `reference`.
pub fn find_previous<'a>(index: &'a DailyNoteIndex, reference: &str) -> Option<&'a str> {
    let paths = index.paths();
    let pos = paths.partition_point(|p| p.as_str() < reference);
    pos.checked_sub(1).map(|i| paths[i].as_str())
}

/// Least path strictly after `reference`.
pub fn find_next<'a>(index: &'a DailyNoteIndex, reference: &str) -> Option<&'a str> {
    let paths = index.paths();
    let pos = paths.partition_point(|p| p.as_str() <= reference);
    paths.get(pos).map(String::as_str)
}
