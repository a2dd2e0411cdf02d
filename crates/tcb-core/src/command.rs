//! Command codec: renders a [`Document`] into the runner command line and
//! parses pasted command text back into a document.
//!
//! The rendered form is
//!
//! ```text
//! <interpreter> <script> '<json>'
//! ```
//!
//! where the prefix is reproduced byte-for-byte and only the quoted JSON
//! payload varies.

use regex::Regex;
use thiserror::Error;

use crate::document::Document;
use crate::error::{Error, Result};

/// Default interpreter invocation
pub const DEFAULT_INTERPRETER: &str = "python -u";

/// Default runner script
pub const DEFAULT_SCRIPT: &str = "/home/tornado/selenium-tests/testcase_runner.py";

/// Shell-escaped form of a single quote inside a single-quoted string
const ESCAPED_QUOTE: &str = r"'\''";

/// Why pasted text could not be loaded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasteError {
    /// The text does not contain `<marker> '...'`
    #[error("expected a `{marker} '...'` command")]
    WrongFormat { marker: String },

    /// The quoted payload is not a valid document
    #[error("{0}")]
    Parse(String),
}

/// The fixed prefix of the generated command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    pub interpreter: String,
    pub script: String,
}

impl Default for CommandTemplate {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            script: DEFAULT_SCRIPT.to_string(),
        }
    }
}

impl CommandTemplate {
    pub fn new(interpreter: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
        }
    }

    /// `<interpreter> <script>`, or just the script when no interpreter is set
    pub fn prefix(&self) -> String {
        let interpreter = self.interpreter.trim();
        if interpreter.is_empty() {
            self.script.clone()
        } else {
            format!("{} {}", interpreter, self.script)
        }
    }

    /// The script's file name, used to locate the payload in pasted text
    pub fn marker(&self) -> &str {
        self.script
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.script)
    }
}

/// Renders and parses command text for one [`CommandTemplate`]
#[derive(Debug, Clone)]
pub struct CommandCodec {
    template: CommandTemplate,
    pattern: Regex,
}

impl CommandCodec {
    pub fn new(template: CommandTemplate) -> Result<Self> {
        let marker = template.marker();
        if marker.trim().is_empty() {
            return Err(Error::template(format!(
                "script path `{}` has no file name",
                template.script
            )));
        }
        let pattern = Regex::new(&format!(r"(?s){}\s+'(.*)'", regex::escape(marker)))
            .map_err(|e| Error::template(e.to_string()))?;
        Ok(Self { template, pattern })
    }

    pub fn template(&self) -> &CommandTemplate {
        &self.template
    }

    /// Full command with a pretty-printed payload (used for the preview)
    pub fn render(&self, doc: &Document) -> Result<String> {
        let json = serde_json::to_string_pretty(doc)?;
        Ok(self.wrap(&json))
    }

    /// Full command on a single line (used for copying).
    ///
    /// Starts from the pretty payload and drops every whitespace character
    /// outside JSON string literals. The prefix and quoting are untouched.
    pub fn render_compact(&self, doc: &Document) -> Result<String> {
        let json = serde_json::to_string_pretty(doc)?;
        Ok(self.wrap(&compact_json(&json)))
    }

    /// Extract the unescaped JSON payload from pasted text
    pub fn extract_payload(&self, text: &str) -> Option<String> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| shell_unescape(m.as_str()))
    }

    /// Parse pasted command text into a document
    pub fn parse(&self, text: &str) -> std::result::Result<Document, PasteError> {
        let payload = self
            .extract_payload(text)
            .ok_or_else(|| PasteError::WrongFormat {
                marker: self.template.marker().to_string(),
            })?;
        serde_json::from_str(&payload).map_err(|e| PasteError::Parse(e.to_string()))
    }

    fn wrap(&self, json: &str) -> String {
        format!("{} '{}'", self.template.prefix(), shell_escape(json))
    }
}

impl Default for CommandCodec {
    fn default() -> Self {
        Self::new(CommandTemplate::default()).expect("Default command template is valid")
    }
}

/// Remove whitespace outside JSON string literals.
///
/// Whitespace inside strings is kept, so values such as `"hello world"`
/// survive compaction unchanged.
pub fn compact_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in json.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if !c.is_whitespace() {
            out.push(c);
        }
    }

    out
}

fn shell_escape(payload: &str) -> String {
    payload.replace('\'', ESCAPED_QUOTE)
}

fn shell_unescape(payload: &str) -> String {
    payload.replace(ESCAPED_QUOTE, "'")
}
