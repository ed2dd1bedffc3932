use std::{io, path::PathBuf};

use thiserror::Error;

use crate::kind::ItemKind;

/// Errors produced while building, loading or writing sidebar indexes.
#[derive(Error, Debug)]
pub enum SidebarError {
    /// Two items of the same kind share a name within one module.
    #[error("Duplicate {kind} item in module index: {name}")]
    DuplicateName {
        /// Kind both items were filed under.
        kind: ItemKind,
        /// The clashing name.
        name: String,
    },

    /// An item carried a kind tag that is not a recognised sidebar kind.
    #[error("Unknown item kind: {0}")]
    UnknownKind(String),

    /// An item had an empty name.
    #[error("Empty item name for kind {kind}")]
    EmptyName {
        /// Kind the nameless item was filed under.
        kind: ItemKind,
    },

    /// A summary spanned more than one line.
    #[error("Multi-line summary for {kind} item: {name}")]
    MultiLineSummary {
        /// Kind the item was filed under.
        kind: ItemKind,
        /// Name of the item.
        name: String,
    },

    /// A module path did not resolve to a module in the crate.
    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    /// No Cargo.toml was found for a target.
    #[error("Failed to find Cargo.toml in the current directory or any parent directories")]
    ManifestNotFound,

    /// The target path exists in no form we can document.
    #[error("Invalid target path: {0}")]
    InvalidTargetPath(PathBuf),

    /// A sidebar script did not have the `initSidebarItems(...)` shape.
    #[error("Invalid sidebar script: {0}")]
    InvalidScript(String),

    /// Reading or writing a file failed.
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] io::Error),

    /// JSON could not be parsed or did not describe a valid index.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// Rustdoc failed to produce JSON output.
    #[error("Failed to generate rustdoc JSON: {0}")]
    RustdocJsonError(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, SidebarError>;
