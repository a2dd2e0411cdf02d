//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use tcb_core::prelude::*;

const APP_DIR: &str = "test-command-builder";
const CONFIG_FILENAME: &str = "config.toml";

/// Contents written by `tcb --init-config`
pub const DEFAULT_CONFIG: &str = r#"# Test Command Builder Configuration

[command]
interpreter = "python -u"
script = "/home/tornado/selenium-tests/testcase_runner.py"

[behavior]
keep_last_record = false   # Refuse to remove the last test case
confirm_quit = false       # Ask before quitting with unsaved work

# Fields every new test case starts with. Remove the table to start empty.
[template.record_fields]
predecessor_test = ""
wallet_id = ""
provider = ""
balance = ""
skip_test = "False"
testcase_tag = ""
status = true

[ui]
notification_ms = 3000
show_preview = true

[clipboard]
# copy_command = "xclip -selection clipboard"
# paste_command = "xclip -selection clipboard -o"
timeout_ms = 2000
"#;

/// `<config_dir>/test-command-builder/config.toml`, if the platform has a
/// config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, falling back to defaults when the file is
/// missing, unreadable or invalid
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write [`DEFAULT_CONFIG`] to `path` unless a file already exists there.
///
/// Returns `true` if a new file was written.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", parent.display(), e)))?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;
    info!("Created default config at {:?}", path);
    Ok(true)
}
