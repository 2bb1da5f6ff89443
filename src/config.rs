//! Configuration file support
//!
//! Loads settings from ~/.snipman.conf (or %USERPROFILE%\.snipman.conf
//! on Windows).
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # snipman configuration
//! editor/tab_size = 4
//! editor/line_numbers_visible = true
//! display/time_format = 12h
//! appearance/theme = dark
//! syntax_colors/keyword = #C586C0
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Color groups that accept a `syntax_colors/<group>` override
pub const COLOR_GROUPS: [&str; 12] = [
    "keyword",
    "comment",
    "string",
    "number",
    "function",
    "class_type",
    "operator_brace",
    "preprocessor_decorator",
    "tag",
    "attribute",
    "selector",
    "property",
];

/// Clock format used when displaying timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    #[default]
    Twelve,
    TwentyFour,
}

impl TimeFormat {
    /// Parse the `display/time_format` value ("12h" or "24h")
    pub fn from_value(s: &str) -> Option<Self> {
        match s.trim() {
            "12h" => Some(TimeFormat::Twelve),
            "24h" => Some(TimeFormat::TwentyFour),
            _ => None,
        }
    }

    /// The value written back to the config file
    pub fn as_value(self) -> &'static str {
        match self {
            TimeFormat::Twelve => "12h",
            TimeFormat::TwentyFour => "24h",
        }
    }
}

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Spaces per tab stop when rendering code (1-16)
    pub tab_size: usize,
    /// Whether to show a line-number gutter
    pub line_numbers_visible: bool,
    /// Clock format for displayed timestamps
    pub time_format: TimeFormat,
    /// Theme identifier (free-form)
    pub theme: String,
    /// Syntax color overrides, keyed by color group name
    pub syntax_colors: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tab_size: 4,
            line_numbers_visible: true,
            time_format: TimeFormat::Twelve,
            theme: String::new(),
            syntax_colors: HashMap::new(),
        }
    }
}

impl Settings {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".snipman.conf"))
    }

    /// Load configuration from the default file
    pub fn load() -> Self {
        let mut settings = Settings::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                settings.apply(&Self::parse(&contents));
            }
        }

        settings
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut pairs = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                pairs.insert(key.trim().to_lowercase(), value.trim().to_string());
            }
        }

        pairs
    }

    /// Apply parsed key-value pairs
    fn apply(&mut self, pairs: &HashMap<String, String>) {
        for (key, value) in pairs {
            self.set(key, value);
        }
    }

    /// Set a single key; unrecognized keys are ignored
    ///
    /// Returns false if the key is not a recognized setting.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match key {
            "editor/tab_size" => {
                if let Ok(n) = value.parse::<usize>() {
                    self.tab_size = n.clamp(1, 16);
                }
                true
            }
            "editor/line_numbers_visible" => {
                self.line_numbers_visible = parse_bool(value);
                true
            }
            "display/time_format" => {
                if let Some(fmt) = TimeFormat::from_value(value) {
                    self.time_format = fmt;
                }
                true
            }
            "appearance/theme" => {
                self.theme = value.to_string();
                true
            }
            _ => {
                if let Some(group) = key.strip_prefix("syntax_colors/") {
                    if COLOR_GROUPS.contains(&group) {
                        self.syntax_colors.insert(group.to_string(), value.to_string());
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Read a single key as its config-file string form
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "editor/tab_size" => Some(self.tab_size.to_string()),
            "editor/line_numbers_visible" => Some(self.line_numbers_visible.to_string()),
            "display/time_format" => Some(self.time_format.as_value().to_string()),
            "appearance/theme" => Some(self.theme.clone()),
            _ => key
                .strip_prefix("syntax_colors/")
                .and_then(|group| self.syntax_colors.get(group).cloned()),
        }
    }

    /// The configured color override for a group, if any
    pub fn color_override(&self, group: &str) -> Option<&str> {
        self.syntax_colors.get(group).map(|s| s.as_str())
    }

    /// Save current configuration to the default file
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            fs::write(path, self.to_file_string())?;
        }
        Ok(())
    }

    /// Render the config file contents
    fn to_file_string(&self) -> String {
        let mut out = String::from("# snipman configuration\n\n");
        out.push_str(&format!("editor/tab_size = {}\n", self.tab_size));
        out.push_str(&format!(
            "editor/line_numbers_visible = {}\n",
            self.line_numbers_visible
        ));
        out.push_str(&format!(
            "display/time_format = {}\n",
            self.time_format.as_value()
        ));
        if !self.theme.is_empty() {
            out.push_str(&format!("appearance/theme = {}\n", self.theme));
        }

        let mut groups: Vec<_> = self.syntax_colors.iter().collect();
        groups.sort();
        for (group, color) in groups {
            out.push_str(&format!("syntax_colors/{} = {}\n", group, color));
        }

        out
    }
}

/// Home directory from the environment
pub fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }

    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tab_size, 4);
        assert!(settings.line_numbers_visible);
        assert_eq!(settings.time_format, TimeFormat::Twelve);
        assert!(settings.syntax_colors.is_empty());
    }

    #[test]
    fn test_parse_and_apply() {
        let contents = r#"
# Comment
editor/tab_size = 8
editor/line_numbers_visible = false
display/time_format = 24h
appearance/theme = light
syntax_colors/keyword = #FF0000
        "#;

        let mut settings = Settings::default();
        settings.apply(&Settings::parse(contents));

        assert_eq!(settings.tab_size, 8);
        assert!(!settings.line_numbers_visible);
        assert_eq!(settings.time_format, TimeFormat::TwentyFour);
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.color_override("keyword"), Some("#FF0000"));
    }

    #[test]
    fn test_tab_size_clamped() {
        let mut settings = Settings::default();
        settings.set("editor/tab_size", "0");
        assert_eq!(settings.tab_size, 1);
        settings.set("editor/tab_size", "99");
        assert_eq!(settings.tab_size, 16);
        settings.set("editor/tab_size", "not a number");
        assert_eq!(settings.tab_size, 16);
    }

    #[test]
    fn test_invalid_time_format_keeps_default() {
        let mut settings = Settings::default();
        settings.set("display/time_format", "13h");
        assert_eq!(settings.time_format, TimeFormat::Twelve);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let mut settings = Settings::default();
        assert!(!settings.set("no/such_key", "1"));
        assert!(!settings.set("syntax_colors/bogus_group", "#123456"));
        assert!(settings.syntax_colors.is_empty());
    }

    #[test]
    fn test_get_round_trip() {
        let mut settings = Settings::default();
        settings.set("syntax_colors/comment", "#00FF00");
        assert_eq!(settings.get("editor/tab_size").as_deref(), Some("4"));
        assert_eq!(settings.get("display/time_format").as_deref(), Some("12h"));
        assert_eq!(settings.get("syntax_colors/comment").as_deref(), Some("#00FF00"));
        assert_eq!(settings.get("syntax_colors/keyword"), None);
    }

    #[test]
    fn test_file_round_trip() {
        let mut settings = Settings::default();
        settings.set("editor/tab_size", "2");
        settings.set("syntax_colors/string", "#ABCDEF");

        let text = settings.to_file_string();
        let mut reloaded = Settings::default();
        reloaded.apply(&Settings::parse(&text));

        assert_eq!(reloaded.tab_size, 2);
        assert_eq!(reloaded.color_override("string"), Some("#ABCDEF"));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("Yes"));
        assert!(parse_bool("on"));
        assert!(parse_bool("1"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("anything"));
    }
}
