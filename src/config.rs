use std::env;
use std::error::Error;
use std::path::PathBuf;

pub const DEFAULT_FOLDER: &str = "Daily";
pub const DEFAULT_LINE: usize = 1;
/// Extension every note path ends with, without the dot.
pub const NOTE_EXT: &str = "md";

/// Runtime settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub vault: PathBuf,
    pub folder: String,
    /// Zero-based index of the breadcrumb line inside a daily note.
    pub line: usize,
}

impl Settings {
    pub fn new(vault: PathBuf) -> Self {
        Self { vault, folder: DEFAULT_FOLDER.to_string(), line: DEFAULT_LINE }
    }

    /// Read `DAILY_NAV_VAULT`, `DAILY_NAV_FOLDER` and `DAILY_NAV_LINE`,
    /// falling back to the current directory, `Daily` and line 1.
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        let vault = match env::var("DAILY_NAV_VAULT") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => env::current_dir()?,
        };
        let mut settings = Self::new(vault);
        if let Ok(folder) = env::var("DAILY_NAV_FOLDER") {
            settings.set_folder(&folder)?;
        }
        if let Ok(line) = env::var("DAILY_NAV_LINE") {
            settings.set_line(&line)?;
        }
        Ok(settings)
    }

    pub fn set_folder(&mut self, folder: &str) -> Result<(), Box<dyn Error>> {
        let folder = folder.trim().trim_matches('/');
        if folder.is_empty() || folder.contains('/') {
            return Err(format!(
                "Daily folder must be a single folder name, got \"{folder}\""
            )
            .into());
        }
        self.folder = folder.to_string();
        Ok(())
    }

    pub fn set_line(&mut self, raw: &str) -> Result<(), Box<dyn Error>> {
        self.line = raw
            .trim()
            .parse()
            .map_err(|_| format!("Line must be a non-negative number, got \"{raw}\""))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new(PathBuf::from("/vault"));
        assert_eq!(settings.folder, "Daily");
        assert_eq!(settings.line, 1);
    }

    #[test]
    fn test_set_folder_strips_slashes() {
        let mut settings = Settings::new(PathBuf::from("/vault"));
        settings.set_folder("/Journal/").unwrap();
        assert_eq!(settings.folder, "Journal");
        assert!(settings.set_folder("a/b").is_err());
        assert!(settings.set_folder("  ").is_err());
    }

    #[test]
    fn test_set_line_rejects_garbage() {
        let mut settings = Settings::new(PathBuf::from("/vault"));
        settings.set_line(" 3 ").unwrap();
        assert_eq!(settings.line, 3);
        assert!(settings.set_line("-1").is_err());
        assert!(settings.set_line("two").is_err());
    }
}
