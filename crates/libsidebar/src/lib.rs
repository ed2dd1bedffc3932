//! Per-module sidebar indexes for rustdoc output.
//!
//! A [`ModuleIndex`] lists the items of one module grouped by [`ItemKind`],
//! each with a one-line summary. Indexes are built from [`RawItem`]
//! descriptors, validated on construction, and persisted as
//! `initSidebarItems({...});` scripts.

/// Error types.
mod error;
/// Descriptor extraction from rustdoc JSON.
mod extract;
/// The module index model.
mod index;
/// Item kinds.
mod kind;
/// Manifest discovery.
mod manifest;
/// Sidebar script codec.
mod script;
/// Serde support for indexes.
mod serial;
/// The configurable driver.
mod sidebar;
/// Summary condensing.
mod summary;

pub use crate::{
    error::{Result, SidebarError},
    extract::{Extractor, kind_tag},
    index::{ItemEntry, ModuleIndex, RawItem},
    kind::ItemKind,
    manifest::find_manifest,
    script::{SIDEBAR_FILE_NAME, from_script, script_path, to_json, to_script},
    sidebar::Sidebar,
    summary::{
        DEFAULT_MAX_CHARS, SummaryPolicy, condense, first_paragraph, first_sentence, truncate_at_word,
    },
};
