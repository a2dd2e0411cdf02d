//! Startup: settings, the initial document and the TUI entry point

use std::io::Read;
use std::path::PathBuf;

use tcb_app::{AppState, Settings, SystemClipboard};
use tcb_core::prelude::*;
use tcb_core::{CommandCodec, Document};

/// Where `--load` reads a saved command from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    Stdin,
    File(PathBuf),
}

impl LoadSource {
    /// `-` means stdin, anything else is a path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read command from stdin")?;
                Ok(text)
            }
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read command from {}", path.display())),
        }
    }
}

/// Parse saved command text with the same rules as paste
pub fn load_command(codec: &CommandCodec, text: &str) -> Result<Document> {
    codec.parse(text).map_err(|e| Error::load(e.to_string()))
}

/// Build the initial state, seeding the document from `load` if given
pub fn prepare_state(settings: Settings, load: Option<&LoadSource>) -> Result<AppState> {
    let state = AppState::with_settings(settings)?;

    let Some(source) = load else {
        return Ok(state);
    };

    let text = source.read()?;
    let document = load_command(&state.codec, &text)?;
    info!(
        "Loaded {} test case(s) and {} parameter(s) from {:?}",
        document.records.len(),
        document.params.len(),
        source
    );
    Ok(state.with_document(document))
}

/// Run the interactive TUI
pub async fn run_tui(state: AppState) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let clipboard = SystemClipboard::from_settings(&state.settings.clipboard);
    if !clipboard.is_available() {
        warn!("No clipboard tool found; copy and paste will report errors");
    }

    let result = tcb_tui::run(state, clipboard).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Test Command Builder exiting");
    result
}
