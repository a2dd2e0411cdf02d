//! Clipboard bridge.
//!
//! The system clipboard is reached through the platform's command line
//! tools (`pbcopy`, `wl-copy`, `xclip`, ...). Tools are resolved once with
//! `which`; explicit `[clipboard]` commands from the config win over
//! detection.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::sync::Mutex;

use crate::config::ClipboardSettings;

/// Why a clipboard operation failed
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool found")]
    NoTool,

    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` failed: {message}")]
    Failed { program: String, message: String },

    #[error("`{program}` did not finish within {timeout_ms} ms")]
    Timeout { program: String, timeout_ms: u128 },

    #[error("clipboard does not contain text")]
    NotText,
}

/// Text clipboard operations
#[trait_variant::make(Clipboard: Send)]
pub trait LocalClipboard {
    /// Read the current clipboard text
    async fn read_text(&self) -> Result<String, ClipboardError>;

    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tool Detection
// ─────────────────────────────────────────────────────────────────────────────

/// A resolved clipboard tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    /// Parse a configured command line such as `xclip -selection clipboard`
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let program = parts.next()?;
        Some(Self {
            program: PathBuf::from(program),
            args: parts.map(str::to_string).collect(),
        })
    }

    fn display_name(&self) -> String {
        self.program
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).kill_on_drop(true);
        command
    }
}

/// A tool to look for on `PATH`
struct Candidate {
    program: &'static str,
    args: &'static [&'static str],
    wayland_only: bool,
}

const fn candidate(program: &'static str, args: &'static [&'static str]) -> Candidate {
    Candidate {
        program,
        args,
        wayland_only: false,
    }
}

const COPY_CANDIDATES: &[Candidate] = &[
    candidate("pbcopy", &[]),
    Candidate {
        program: "wl-copy",
        args: &[],
        wayland_only: true,
    },
    candidate("xclip", &["-selection", "clipboard"]),
    candidate("xsel", &["--clipboard", "--input"]),
    candidate("clip.exe", &[]),
];

const PASTE_CANDIDATES: &[Candidate] = &[
    candidate("pbpaste", &[]),
    Candidate {
        program: "wl-paste",
        args: &["--no-newline"],
        wayland_only: true,
    },
    candidate("xclip", &["-selection", "clipboard", "-o"]),
    candidate("xsel", &["--clipboard", "--output"]),
    candidate("powershell.exe", &["-NoProfile", "-Command", "Get-Clipboard"]),
];

fn detect(candidates: &[Candidate]) -> Option<ClipboardCommand> {
    let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
    candidates
        .iter()
        .filter(|c| wayland || !c.wayland_only)
        .find_map(|c| {
            let program = which::which(c.program).ok()?;
            tracing::debug!("Using clipboard tool {:?}", program);
            Some(ClipboardCommand {
                program,
                args: c.args.iter().map(|a| a.to_string()).collect(),
            })
        })
}

// ─────────────────────────────────────────────────────────────────────────────
// System Clipboard
// ─────────────────────────────────────────────────────────────────────────────

/// Clipboard backed by external tools
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    copy: Option<ClipboardCommand>,
    paste: Option<ClipboardCommand>,
    timeout: Duration,
}

impl SystemClipboard {
    pub fn new(
        copy: Option<ClipboardCommand>,
        paste: Option<ClipboardCommand>,
        timeout: Duration,
    ) -> Self {
        Self {
            copy,
            paste,
            timeout,
        }
    }

    /// Configured commands first, then whatever is installed
    pub fn from_settings(settings: &ClipboardSettings) -> Self {
        let copy = settings
            .copy_command
            .as_deref()
            .and_then(ClipboardCommand::parse)
            .or_else(|| detect(COPY_CANDIDATES));
        let paste = settings
            .paste_command
            .as_deref()
            .and_then(ClipboardCommand::parse)
            .or_else(|| detect(PASTE_CANDIDATES));

        if copy.is_none() || paste.is_none() {
            tracing::warn!(
                "Clipboard tools missing (copy: {}, paste: {})",
                copy.is_some(),
                paste.is_some()
            );
        }

        Self::new(copy, paste, Duration::from_millis(settings.timeout_ms))
    }

    pub fn is_available(&self) -> bool {
        self.copy.is_some() && self.paste.is_some()
    }

    fn timed_out(&self, tool: &ClipboardCommand) -> ClipboardError {
        ClipboardError::Timeout {
            program: tool.display_name(),
            timeout_ms: self.timeout.as_millis(),
        }
    }
}

fn spawn_error(tool: &ClipboardCommand, source: std::io::Error) -> ClipboardError {
    ClipboardError::Spawn {
        program: tool.display_name(),
        source,
    }
}

fn exit_error(
    tool: &ClipboardCommand,
    status: std::process::ExitStatus,
    stderr: &[u8],
) -> ClipboardError {
    let stderr = String::from_utf8_lossy(stderr);
    let message = match stderr.trim() {
        "" => status.to_string(),
        detail => detail.to_string(),
    };
    ClipboardError::Failed {
        program: tool.display_name(),
        message,
    }
}

impl Clipboard for SystemClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        let tool = self.paste.as_ref().ok_or(ClipboardError::NoTool)?;
        let mut command = tool.command();
        command.stdin(Stdio::null());

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| self.timed_out(tool))?
            .map_err(|e| spawn_error(tool, e))?;

        if !output.status.success() {
            return Err(exit_error(tool, output.status, &output.stderr));
        }
        String::from_utf8(output.stdout).map_err(|_| ClipboardError::NotText)
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let tool = self.copy.as_ref().ok_or(ClipboardError::NoTool)?;
        let mut command = tool.command();
        // xclip and xsel fork a child that keeps the selection alive and
        // inherits these handles, so nothing here may wait for pipe EOF
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let mut child = command.spawn().map_err(|e| spawn_error(tool, e))?;
        let write_and_wait = async {
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(text.as_bytes()).await?;
                // Closing stdin tells the tool the text is complete
                drop(stdin);
            }
            child.wait().await
        };

        let status = tokio::time::timeout(self.timeout, write_and_wait)
            .await
            .map_err(|_| self.timed_out(tool))?
            .map_err(|e| spawn_error(tool, e))?;

        if !status.success() {
            return Err(exit_error(tool, status, &[]));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-Memory Clipboard
// ─────────────────────────────────────────────────────────────────────────────

/// Process-local clipboard, used by tests and when no tool is installed
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(text.into()))),
        }
    }

    pub async fn contents(&self) -> Option<String> {
        self.contents.lock().await.clone()
    }
}

impl Clipboard for MemoryClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        self.contents
            .lock()
            .await
            .clone()
            .ok_or(ClipboardError::NotText)
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().await = Some(text.to_string());
        Ok(())
    }
}
