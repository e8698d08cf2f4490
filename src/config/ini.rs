//! INI-style configuration file parsing.
//!
//! Sections are written as `[name]` and hold `key=value` (or `key: value`)
//! pairs. The `[DEFAULT]` section is the fallback: any key a named section
//! does not define is looked up there.

use std::collections::HashMap;

use thiserror::Error;

use super::defaults;

/// Syntax error in an INI document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct IniError {
    /// 1-based line number
    pub line: usize,
    /// What was wrong with the line
    pub reason: String,
}

impl IniError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Failure of a section lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// The section is neither defined nor the fallback section.
    SectionNotFound,
}

type Section = HashMap<String, String>;

/// Parsed configuration: a fallback section plus named sections.
///
/// The fallback section always exists, even when the file never mentions it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniConfig {
    fallback: Section,
    sections: HashMap<String, Section>,
}

impl IniConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an INI document.
    ///
    /// Keys are trimmed and lower-cased, values are trimmed. Section names
    /// are case-sensitive and end at the last `]` of the header line; text
    /// after it is ignored. A repeated section is merged into the earlier
    /// one and a repeated key keeps its last value.
    ///
    /// A line indented deeper than the key it follows continues that key's
    /// value on a new line. Blank lines inside such a value are kept; a
    /// comment line ends it.
    ///
    /// # Errors
    ///
    /// Returns an [`IniError`] for a key/value pair before the first section
    /// header, an empty section name or key, or a line that is neither a
    /// comment, a section header nor a key/value pair.
    pub fn parse(content: &str) -> Result<Self, IniError> {
        let mut config = Self::new();
        let mut current: Option<String> = None;
        let mut open: Option<OpenValue> = None;

        for (index, raw) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            let indent = raw.len() - raw.trim_start().len();

            if line.is_empty() {
                if let Some(ref mut value) = open {
                    value.blank_lines += 1;
                }
                continue;
            }

            if line.starts_with('#') || line.starts_with(';') {
                open = None;
                continue;
            }

            if let (Some(value), Some(section)) = (open.as_mut(), current.as_deref()) {
                if indent > value.indent {
                    config.continue_value(section, value, line);
                    continue;
                }
            }
            open = None;

            if let Some(header) = line.strip_prefix('[') {
                let name = parse_header(header, line_no)?;
                config.section_mut(name);
                current = Some(name.to_string());
                continue;
            }

            let (key, value) = split_pair(line).ok_or_else(|| {
                IniError::new(line_no, format!("expected key=value, got '{line}'"))
            })?;
            if key.is_empty() {
                return Err(IniError::new(line_no, "empty key"));
            }
            let section = current.as_deref().ok_or_else(|| {
                IniError::new(line_no, "key/value pair before any section header")
            })?;

            config.section_mut(section).insert(key.clone(), value);
            open = Some(OpenValue {
                key,
                indent,
                blank_lines: 0,
            });
        }

        Ok(config)
    }

    /// Returns true if `name` is the fallback section or a defined section.
    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        name == defaults::TARGET || self.sections.contains_key(name)
    }

    /// Looks up `key` in `section`, falling back to the fallback section.
    ///
    /// The key is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::SectionNotFound`] if `section` is not defined.
    pub fn get(&self, section: &str, key: &str) -> Result<Option<&str>, LookupError> {
        let key = key.to_ascii_lowercase();

        if !self.has_section(section) {
            return Err(LookupError::SectionNotFound);
        }

        if let Some(value) = self.sections.get(section).and_then(|s| s.get(&key)) {
            return Ok(Some(value.as_str()));
        }

        Ok(self.fallback.get(&key).map(String::as_str))
    }

    /// Appends a continuation line to the value that is still open.
    fn continue_value(&mut self, section: &str, open: &mut OpenValue, line: &str) {
        if let Some(value) = self.section_mut(section).get_mut(&open.key) {
            value.push_str(&"\n".repeat(open.blank_lines + 1));
            value.push_str(line);
        }
        open.blank_lines = 0;
    }

    fn section_mut(&mut self, name: &str) -> &mut Section {
        if name == defaults::TARGET {
            &mut self.fallback
        } else {
            self.sections.entry(name.to_string()).or_default()
        }
    }
}

/// Key whose value may still be continued by indented lines.
struct OpenValue {
    key: String,
    indent: usize,
    blank_lines: usize,
}

/// Extracts the section name from a header line with its `[` removed.
fn parse_header(header: &str, line_no: usize) -> Result<&str, IniError> {
    let end = header
        .rfind(']')
        .ok_or_else(|| IniError::new(line_no, "unterminated section header"))?;
    let name = header[..end].trim();
    if name.is_empty() {
        return Err(IniError::new(line_no, "empty section name"));
    }
    Ok(name)
}

/// Splits a line at the first `=` or `:`, whichever comes first.
fn split_pair(line: &str) -> Option<(String, String)> {
    let at = line.find(['=', ':'])?;
    let key = line[..at].trim().to_ascii_lowercase();
    let value = line[at + 1..].trim().to_string();
    Some((key, value))
}
