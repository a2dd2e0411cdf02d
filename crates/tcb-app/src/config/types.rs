//! Configuration types

use serde::{Deserialize, Serialize};
use tcb_core::{CommandTemplate, FieldSet, DEFAULT_INTERPRETER, DEFAULT_SCRIPT};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub command: CommandSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub template: TemplateSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub clipboard: ClipboardSettings,
}

/// The fixed command prefix
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommandSettings {
    /// Interpreter invocation, e.g. `python -u`
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Runner script path; its file name is the paste marker
    #[serde(default = "default_script")]
    pub script: String,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            script: default_script(),
        }
    }
}

impl CommandSettings {
    pub fn template(&self) -> CommandTemplate {
        CommandTemplate::new(self.interpreter.clone(), self.script.clone())
    }
}

/// Behavior settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Refuse to remove the last remaining test case
    #[serde(default)]
    pub keep_last_record: bool,

    /// Ask before quitting when the document is not empty
    #[serde(default)]
    pub confirm_quit: bool,
}

/// Defaults applied to newly added test cases
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TemplateSettings {
    /// Fields (and their initial values) every new test case starts with
    #[serde(default)]
    pub record_fields: FieldSet,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long notifications stay visible
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,

    /// Show the generated command preview panel
    #[serde(default = "default_true")]
    pub show_preview: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            notification_ms: default_notification_ms(),
            show_preview: true,
        }
    }
}

/// Clipboard bridge settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClipboardSettings {
    /// Command that reads text to copy from stdin (overrides detection)
    #[serde(default)]
    pub copy_command: Option<String>,

    /// Command that prints the clipboard to stdout (overrides detection)
    #[serde(default)]
    pub paste_command: Option<String>,

    /// Give up on a clipboard tool after this long
    #[serde(default = "default_clipboard_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            copy_command: None,
            paste_command: None,
            timeout_ms: default_clipboard_timeout_ms(),
        }
    }
}

fn default_interpreter() -> String {
    DEFAULT_INTERPRETER.to_string()
}

fn default_script() -> String {
    DEFAULT_SCRIPT.to_string()
}

fn default_notification_ms() -> u64 {
    3000
}

fn default_clipboard_timeout_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}
