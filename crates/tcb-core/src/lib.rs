//! # tcb-core - Core Domain Types
//!
//! Foundation crate for Test Command Builder. Provides the document model,
//! the command codec, error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Document Model (`document`)
//! - [`Document`] - Ordered test case records plus flat string parameters
//! - [`Record`] - One named test case, an explicit `(id, fields)` pair
//! - [`FieldValue`] - A text or boolean field value
//! - [`FieldSet`], [`Params`] - Insertion-ordered mappings
//!
//! ### Command Codec (`command`)
//! - [`CommandTemplate`] - The fixed `<interpreter> <script>` prefix
//! - [`CommandCodec`] - Render a document into a command, parse one back
//! - [`PasteError`] - Wrong format vs. parse error on paste
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure and startup error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tcb_core::prelude::*;
//! ```

pub mod command;
pub mod document;
pub mod error;
pub mod logging;

/// Prelude for common imports used throughout all Test Command Builder crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use command::{
    compact_json, CommandCodec, CommandTemplate, PasteError, DEFAULT_INTERPRETER, DEFAULT_SCRIPT,
};
pub use document::{
    next_field_name, next_param_name, unique_name, Document, FieldSet, FieldValue, Params, Record,
    GENERATED_PARAM_PREFIX, GENERATED_RECORD_PREFIX,
};
pub use error::{Error, Result, ResultExt};
