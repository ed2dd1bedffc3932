//! Reading and writing `sidebar-items.js` scripts.
//!
//! A sidebar script is a single data assignment evaluated when a page loads:
//!
//! ```text
//! initSidebarItems({"enum":[["InitError","Custom error type."]],"fn":[["join",""]]});
//! ```

use std::path::{Path, PathBuf};

use crate::{
    error::{Result, SidebarError},
    index::ModuleIndex,
};

/// File name of a module's sidebar script.
pub const SIDEBAR_FILE_NAME: &str = "sidebar-items.js";

/// Function the sidebar widget exposes for registering items.
const INIT_CALL: &str = "initSidebarItems(";

/// Render `index` as a sidebar script.
pub fn to_script(index: &ModuleIndex) -> Result<String> {
    let payload = serde_json::to_string(index)?;
    Ok(format!("{INIT_CALL}{payload});"))
}

/// Render `index` as indented JSON, without the script wrapper.
pub fn to_json(index: &ModuleIndex) -> Result<String> {
    Ok(serde_json::to_string_pretty(index)?)
}

/// Parse a sidebar script back into a validated index.
///
/// Surrounding whitespace and the trailing semicolon are optional; anything
/// else around the `initSidebarItems(...)` call is rejected.
pub fn from_script(script: &str) -> Result<ModuleIndex> {
    let trimmed = script.trim();
    let call = trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end();
    let payload = call
        .strip_prefix(INIT_CALL)
        .ok_or_else(|| SidebarError::InvalidScript(format!("expected a call to {INIT_CALL}...)")))?
        .strip_suffix(')')
        .ok_or_else(|| SidebarError::InvalidScript("unterminated call".to_string()))?;
    Ok(serde_json::from_str(payload)?)
}

/// Location of the sidebar script for `module_path` under `root`.
///
/// `rayon::api` maps to `root/rayon/api/sidebar-items.js`.
pub fn script_path(root: &Path, module_path: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    path.extend(module_path.split("::").filter(|segment| !segment.is_empty()));
    path.push(SIDEBAR_FILE_NAME);
    path
}
