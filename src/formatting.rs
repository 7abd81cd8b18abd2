use terminal_size::{Width, terminal_size};
use yansi::Paint;

const DEFAULT_COLUMNS: usize = 100;

/// Color palette for consistent theming
pub struct ColorPalette {
    pub muted: (u8, u8, u8),    // absent neighbors, separators
    pub header: (u8, u8, u8),   // table headers
    pub note: (u8, u8, u8),     // note paths
    pub changed: (u8, u8, u8),  // rewritten lines
}

impl ColorPalette {
    pub const CATPPUCCIN: Self = Self {
        muted: (108, 112, 134),   // Gray
        header: (148, 226, 213),  // Teal
        note: (137, 180, 250),    // Blue
        changed: (166, 227, 161), // Green
    };
}

pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::CATPPUCCIN }
    }

    pub fn from_env(plain: bool) -> Self {
        Self::new(!plain && std::env::var("NO_COLOR").is_err())
    }

    fn paint(&self, text: &str, rgb: (u8, u8, u8), bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let (r, g, b) = rgb;
        if bold {
            Paint::rgb(text, r, g, b).bold().to_string()
        } else {
            Paint::rgb(text, r, g, b).to_string()
        }
    }

    pub fn format_header(&self, text: &str) -> String {
        self.paint(text, self.palette.header, true)
    }

    pub fn format_note(&self, path: &str) -> String {
        self.paint(path, self.palette.note, false)
    }

    pub fn format_muted(&self, text: &str) -> String {
        self.paint(text, self.palette.muted, false)
    }

    pub fn format_changed(&self, line: &str) -> String {
        self.paint(line, self.palette.changed, false)
    }

    pub fn format_neighbor(&self, path: Option<&str>) -> String {
        match path {
            Some(p) => self.format_note(p),
            None => self.format_muted("-"),
        }
    }
}

/// Render a text table sized to the widest visible cell in each column.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| display_len(h)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_len(cell));
        }
    }
    let format_row = |row: &[String]| -> String {
        row.iter()
            .zip(&widths)
            .map(|(cell, w)| pad_field(cell, *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = format_row(headers);
    for row in rows {
        out.push('\n');
        out.push_str(&format_row(row.as_slice()));
    }
    out
}

/// Right-pad a field based on visible length (ignoring ANSI codes).
pub fn pad_field(display: &str, target: usize) -> String {
    let padding = target.saturating_sub(display_len(display));
    format!("{display}{}", " ".repeat(padding))
}

/// Truncate text to a width, appending an ellipsis when needed.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_width - 1).collect();
    out.push('…');
    out
}

/// Compute visible length of a string, ignoring ANSI escape sequences.
pub fn display_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        len += 1;
    }
    len
}

pub fn terminal_columns() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_COLUMNS)
}
