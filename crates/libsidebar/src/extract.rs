//! Collect sidebar descriptors from a rustdoc JSON crate model.
#![allow(clippy::missing_docs_in_private_items)]

use std::collections::{HashMap, HashSet};

use rustdoc_types::{Crate, Id, Item, ItemEnum, MacroKind, Module, Visibility};
use tracing::{debug, warn};

use crate::{
    error::{Result, SidebarError},
    index::RawItem,
    kind::ItemKind,
};

/// Sidebar kind for a rustdoc item, or `None` for items that never get a
/// sidebar entry of their own (impls, fields, variants, associated items,
/// `use` declarations).
pub fn kind_tag(inner: &ItemEnum) -> Option<ItemKind> {
    match inner {
        ItemEnum::Module(_) => Some(ItemKind::Mod),
        ItemEnum::Struct(_) => Some(ItemKind::Struct),
        ItemEnum::Union(_) => Some(ItemKind::Union),
        ItemEnum::Enum(_) => Some(ItemKind::Enum),
        ItemEnum::Trait(_) => Some(ItemKind::Trait),
        ItemEnum::TraitAlias(_) => Some(ItemKind::TraitAlias),
        ItemEnum::Function(_) => Some(ItemKind::Fn),
        ItemEnum::TypeAlias(_) => Some(ItemKind::Type),
        ItemEnum::Constant { .. } => Some(ItemKind::Const),
        ItemEnum::Static(_) => Some(ItemKind::Static),
        ItemEnum::Macro(_) => Some(ItemKind::Macro),
        ItemEnum::ProcMacro(proc_macro) => Some(match proc_macro.kind {
            MacroKind::Bang => ItemKind::Macro,
            MacroKind::Attr => ItemKind::Attr,
            MacroKind::Derive => ItemKind::Derive,
        }),
        ItemEnum::Primitive(_) => Some(ItemKind::Primitive),
        ItemEnum::ExternType => Some(ItemKind::ForeignType),
        ItemEnum::ExternCrate { .. } => Some(ItemKind::ExternCrate),
        _ => None,
    }
}

/// Walks the module tree of a rustdoc crate and lists each module's items.
#[derive(Debug, Clone)]
pub struct Extractor<'a> {
    index: &'a HashMap<Id, Item>,
    root: Id,
    include_private: bool,
    sorted: bool,
}

impl<'a> Extractor<'a> {
    /// Create an extractor over a whole crate.
    pub fn new(crate_data: &'a Crate) -> Self {
        Self::from_parts(&crate_data.index, crate_data.root)
    }

    /// Create an extractor from an item index and the id of the root module.
    pub fn from_parts(index: &'a HashMap<Id, Item>, root: Id) -> Self {
        Self {
            index,
            root,
            include_private: false,
            sorted: true,
        }
    }

    /// Whether non-public items are listed.
    pub fn with_private(mut self, include_private: bool) -> Self {
        self.include_private = include_private;
        self
    }

    /// Whether each module's items are sorted by name.
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Name of the crate, taken from the root module.
    pub fn crate_name(&self) -> Result<&'a str> {
        self.index
            .get(&self.root)
            .and_then(|item| item.name.as_deref())
            .ok_or_else(|| SidebarError::ModuleNotFound("crate root".to_string()))
    }

    /// Resolve a `::` separated module path to a module id.
    ///
    /// The first segment names the crate (`-` and `_` are interchangeable);
    /// an empty path or the crate name alone resolves to the root.
    pub fn find_module(&self, path: &str) -> Result<Id> {
        let not_found = || SidebarError::ModuleNotFound(path.to_string());
        let mut segments = path.split("::").filter(|segment| !segment.is_empty());
        if let Some(first) = segments.next()
            && first.replace('-', "_") != self.crate_name()?.replace('-', "_")
        {
            return Err(not_found());
        }

        let mut current = self.root;
        for segment in segments {
            let module = self.module(current).ok_or_else(not_found)?;
            current = module
                .items
                .iter()
                .filter_map(|id| self.child_module(*id))
                .find(|(name, _)| *name == segment)
                .map(|(_, id)| id)
                .ok_or_else(not_found)?;
        }
        Ok(current)
    }

    /// Every visible module reachable from the root, depth first, with its
    /// full path.
    ///
    /// Modules re-exported under another name are walked at the re-export's
    /// path. A module reachable along several paths is listed once, at the
    /// first path found.
    pub fn modules(&self) -> Result<Vec<(String, Id)>> {
        let mut found = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = vec![(self.crate_name()?.to_string(), self.root)];
        while let Some((path, id)) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let Some(module) = self.module(id) else {
                continue;
            };
            let children: Vec<(String, Id)> = module
                .items
                .iter()
                .filter_map(|child| self.child_module(*child))
                .map(|(name, child)| (format!("{path}::{name}"), child))
                .collect();
            stack.extend(children.into_iter().rev());
            found.push((path, id));
        }
        Ok(found)
    }

    /// Sidebar descriptors for the direct children of a module.
    ///
    /// Non-glob re-exports are listed under their own name with the kind of
    /// the item they point to; their docs fall back to the target's.
    pub fn module_items(&self, module_id: Id) -> Result<Vec<RawItem>> {
        let module = self
            .module(module_id)
            .ok_or_else(|| SidebarError::ModuleNotFound(format!("item {}", module_id.0)))?;

        let mut items = Vec::with_capacity(module.items.len());
        for child_id in &module.items {
            let Some(child) = self.index.get(child_id) else {
                warn!(id = child_id.0, "module lists an item missing from the index");
                continue;
            };
            if !self.is_visible(child) {
                continue;
            }
            if let Some(item) = self.describe(child) {
                items.push(item);
            }
        }

        if self.sorted {
            items.sort_by(|a, b| a.name.cmp(&b.name));
        }
        debug!(module = module_id.0, items = items.len(), "extracted module items");
        Ok(items)
    }

    fn describe(&self, item: &Item) -> Option<RawItem> {
        if let ItemEnum::Use(use_) = &item.inner {
            if use_.is_glob {
                debug!(source = %use_.source, "skipping glob re-export");
                return None;
            }
            let Some(target) = use_.id.as_ref().and_then(|id| self.index.get(id)) else {
                warn!(source = %use_.source, "skipping re-export of an item outside the crate");
                return None;
            };
            let kind = kind_tag(&target.inner)?;
            let docs = item.docs.clone().or_else(|| target.docs.clone());
            return Some(RawItem::new(use_.name.clone(), kind.as_str(), docs));
        }

        let kind = kind_tag(&item.inner)?;
        let name = match (&item.name, &item.inner) {
            (Some(name), _) => name.clone(),
            (None, ItemEnum::ExternCrate { name, rename }) => {
                rename.clone().unwrap_or_else(|| name.clone())
            }
            (None, _) => return None,
        };
        Some(RawItem::new(name, kind.as_str(), item.docs.clone()))
    }

    /// Name and id of a visible submodule, either declared in place or
    /// brought in by a non-glob re-export.
    fn child_module(&self, child: Id) -> Option<(&'a str, Id)> {
        let item = self.index.get(&child)?;
        if !self.is_visible(item) {
            return None;
        }
        match &item.inner {
            ItemEnum::Module(_) => Some((item.name.as_deref()?, item.id)),
            ItemEnum::Use(use_) if !use_.is_glob => {
                let target = use_.id?;
                self.module(target)?;
                Some((use_.name.as_str(), target))
            }
            _ => None,
        }
    }

    fn module(&self, id: Id) -> Option<&'a Module> {
        match &self.index.get(&id)?.inner {
            ItemEnum::Module(module) => Some(module),
            _ => None,
        }
    }

    fn is_visible(&self, item: &Item) -> bool {
        self.include_private || matches!(item.visibility, Visibility::Public | Visibility::Default)
    }
}
