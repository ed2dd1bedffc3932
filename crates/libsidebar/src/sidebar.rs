use std::{
    fs,
    path::{Path, PathBuf},
};

use rustdoc_types::Crate;
use tracing::{debug, info};

use super::{
    error::*,
    extract::Extractor,
    index::ModuleIndex,
    script::{script_path, to_script},
    summary::SummaryPolicy,
};

/// Sidebar builds `sidebar-items.js` indexes for the modules of a crate.
///
/// Crate data comes from rustdoc JSON, either loaded from a file produced
/// earlier or generated on demand with the nightly toolchain. Each module is
/// indexed independently: its public items are grouped by kind, their docs
/// condensed to one line, and the result written as a sidebar script.
#[derive(Debug, Clone)]
pub struct Sidebar {
    /// Whether private and crate-private items are listed.
    include_private: bool,

    /// Whether items are sorted by name within each kind.
    sorted: bool,

    /// How doc comments are condensed into summaries.
    policy: SummaryPolicy,

    /// Whether to suppress rustdoc output while generating JSON.
    silent: bool,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl Sidebar {
    /// Creates a new Sidebar with public items only, sorted entries and the
    /// default summary policy.
    pub fn new() -> Self {
        Self {
            include_private: false,
            sorted: true,
            policy: SummaryPolicy::default(),
            silent: false,
        }
    }

    /// Enables or disables listing of private items.
    pub fn with_private(mut self, include_private: bool) -> Self {
        self.include_private = include_private;
        self
    }

    /// Enables or disables sorting entries by name. When disabled, rustdoc's
    /// source order is kept.
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Sets the policy used to condense doc comments.
    pub fn with_summary_policy(mut self, policy: SummaryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enables or disables silent mode, which suppresses rustdoc output.
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Reads rustdoc JSON previously written to `path`.
    pub fn load_json(&self, path: impl AsRef<Path>) -> Result<Crate> {
        let json_content = fs::read_to_string(path.as_ref())?;
        let crate_data: Crate = serde_json::from_str(&json_content)?;
        debug!(path = %path.as_ref().display(), items = crate_data.index.len(), "loaded rustdoc JSON");
        Ok(crate_data)
    }

    /// Runs rustdoc on the package at `manifest_path` and reads its JSON output.
    ///
    /// Requires the nightly toolchain.
    pub fn generate_json(&self, manifest_path: impl AsRef<Path>) -> Result<Crate> {
        let json_path = rustdoc_json::Builder::default()
            .toolchain("nightly")
            .manifest_path(manifest_path.as_ref())
            .document_private_items(self.include_private)
            .quiet(self.silent)
            .silent(self.silent)
            .build()
            .map_err(|e| SidebarError::RustdocJsonError(e.to_string()))?;
        self.load_json(json_path)
    }

    /// An extractor over `crate_data` configured like this Sidebar.
    pub fn extractor<'a>(&self, crate_data: &'a Crate) -> Extractor<'a> {
        self.configure(Extractor::new(crate_data))
    }

    /// Applies this Sidebar's visibility and ordering settings to `extractor`.
    pub fn configure<'a>(&self, extractor: Extractor<'a>) -> Extractor<'a> {
        extractor
            .with_private(self.include_private)
            .with_sorted(self.sorted)
    }

    /// Builds the index of one module. `None` selects the crate root.
    pub fn index_module(&self, extractor: &Extractor<'_>, path: Option<&str>) -> Result<ModuleIndex> {
        let module_id = extractor.find_module(path.unwrap_or_default())?;
        let items = extractor.module_items(module_id)?;
        ModuleIndex::build_with(items, &self.policy)
    }

    /// Builds the index of every visible module, keyed by module path.
    ///
    /// Stops at the first module whose items fail validation.
    pub fn index_crate(&self, extractor: &Extractor<'_>) -> Result<Vec<(String, ModuleIndex)>> {
        extractor
            .modules()?
            .into_iter()
            .map(|(path, id)| {
                let items = extractor.module_items(id)?;
                let index = ModuleIndex::build_with(items, &self.policy)?;
                Ok((path, index))
            })
            .collect()
    }

    /// Writes one sidebar script per module under `out_dir`, following
    /// rustdoc's directory layout. Returns the written paths in order.
    pub fn write_tree(
        &self,
        indexes: &[(String, ModuleIndex)],
        out_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(indexes.len());
        for (module_path, index) in indexes {
            let path = script_path(out_dir, module_path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, to_script(index)?)?;
            debug!(module = %module_path, path = %path.display(), "wrote sidebar script");
            written.push(path);
        }
        info!(modules = written.len(), out_dir = %out_dir.display(), "wrote sidebar tree");
        Ok(written)
    }
}
