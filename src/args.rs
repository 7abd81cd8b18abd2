use crate::config::Settings;
use std::error::Error;

pub struct ArgParser {
    iter: std::vec::IntoIter<String>,
    command_name: String,
}

impl ArgParser {
    pub fn new(args: Vec<String>, command_name: &str) -> Self {
        Self { iter: args.into_iter(), command_name: command_name.to_string() }
    }

    /// Extract a string value for a flag
    pub fn extract_value(&mut self, flag: &str) -> Result<String, Box<dyn Error>> {
        self.iter.next().ok_or_else(|| {
            format!("Provide a value after {} for {}", flag, self.command_name).into()
        })
    }

    /// Get next positional argument
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        self.iter.next()
    }
}

/// Flags shared by the commands that read daily notes.
#[derive(Debug, Default)]
pub struct CommonFlags {
    pub label: Option<String>,
    pub plain: bool,
    pub positional: Vec<String>,
}

/// Parse `--line`, `--folder`, `--label` and `--plain`, applying the first
/// two directly onto `settings`.
pub fn parse_common(
    args: Vec<String>,
    command_name: &str,
    settings: &mut Settings,
) -> Result<CommonFlags, Box<dyn Error>> {
    let mut flags = CommonFlags::default();
    let mut parser = ArgParser::new(args, command_name);
    while let Some(arg) = parser.next() {
        match arg.as_str() {
            "-l" | "--line" => {
                let v = parser.extract_value(&arg)?;
                settings.set_line(&v)?;
            }
            "-f" | "--folder" => {
                let v = parser.extract_value(&arg)?;
                settings.set_folder(&v)?;
            }
            "--label" => flags.label = Some(parser.extract_value(&arg)?),
            "--plain" => flags.plain = true,
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(format!("Unknown flag for {command_name}: {other}").into());
            }
            _ => flags.positional.push(arg),
        }
    }
    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_arg_parser_extract_value() {
        let mut parser = ArgParser::new(strings(&["--line"]), "fix");
        assert_eq!(parser.next().unwrap(), "--line");
        let err = parser.extract_value("--line").unwrap_err();
        assert_eq!(err.to_string(), "Provide a value after --line for fix");
    }

    #[test]
    fn test_parse_common_applies_settings() {
        let mut settings = Settings::new(PathBuf::from("/vault"));
        let flags = parse_common(
            strings(&["2024-01-05", "--line", "0", "-f", "Journal", "--label", "Week"]),
            "fix",
            &mut settings,
        )
        .unwrap();
        assert_eq!(settings.line, 0);
        assert_eq!(settings.folder, "Journal");
        assert_eq!(flags.label.as_deref(), Some("Week"));
        assert_eq!(flags.positional, vec!["2024-01-05"]);
        assert!(!flags.plain);
    }

    #[test]
    fn test_parse_common_rejects_unknown_flag() {
        let mut settings = Settings::new(PathBuf::from("/vault"));
        assert!(parse_common(strings(&["--bogus"]), "list", &mut settings).is_err());
    }
}
