//! The per-module sidebar index and its construction.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::{
    error::{Result, SidebarError},
    kind::ItemKind,
    summary::{SummaryPolicy, condense},
};

/// Item descriptor as handed over by an extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    /// Item name as it should appear in the sidebar.
    pub name: String,
    /// Kind tag, one of the [`ItemKind`] tags.
    pub kind: String,
    /// Raw documentation text, possibly multi-line markdown.
    pub docs: Option<String>,
}

impl RawItem {
    /// Create a descriptor from its parts.
    pub fn new(name: impl Into<String>, kind: impl Into<String>, docs: Option<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            docs,
        }
    }
}

/// A single sidebar entry: an item name and its one-line summary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemEntry {
    /// Item name, unique within its kind.
    pub name: String,
    /// Single-line documentation excerpt; may be empty.
    pub summary: String,
}

impl ItemEntry {
    /// Create an entry from a name and summary.
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
        }
    }
}

/// Public items of one module, grouped by kind.
///
/// Kinds iterate in tag order; entries within a kind keep the order they were
/// supplied in. Kinds without entries are never stored, so an index built
/// from input that lacks a kind equals one that was deserialized with an empty
/// list for it. There is no way to mutate an index after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleIndex {
    entries: BTreeMap<ItemKind, Vec<ItemEntry>>,
}

impl ModuleIndex {
    /// Build an index from raw descriptors using the default [`SummaryPolicy`].
    pub fn build<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawItem>,
    {
        Self::build_with(items, &SummaryPolicy::default())
    }

    /// Build an index from raw descriptors, condensing docs with `policy`.
    ///
    /// Fails on the first descriptor with an unknown kind tag, an empty name,
    /// or a name already used by an earlier descriptor of the same kind.
    pub fn build_with<I>(items: I, policy: &SummaryPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = RawItem>,
    {
        let mut entries = Vec::new();
        for item in items {
            let kind: ItemKind = item.kind.parse()?;
            let summary = item
                .docs
                .as_deref()
                .map(|docs| condense(docs, policy))
                .unwrap_or_default();
            entries.push((kind, ItemEntry::new(item.name, summary)));
        }
        let index = Self::from_entries(entries)?;
        debug!(kinds = index.entries.len(), items = index.len(), "built module index");
        Ok(index)
    }

    /// Assemble an index from entries whose summaries are already condensed.
    ///
    /// Names are validated exactly as in [`Self::build_with`]; summaries must
    /// fit on one line.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (ItemKind, ItemEntry)>,
    {
        let mut grouped: BTreeMap<ItemKind, Vec<ItemEntry>> = BTreeMap::new();
        let mut seen: HashSet<(ItemKind, String)> = HashSet::new();
        for (kind, entry) in entries {
            if entry.name.is_empty() {
                return Err(SidebarError::EmptyName { kind });
            }
            if entry.summary.contains(['\n', '\r']) {
                return Err(SidebarError::MultiLineSummary {
                    kind,
                    name: entry.name,
                });
            }
            if !seen.insert((kind, entry.name.clone())) {
                return Err(SidebarError::DuplicateName {
                    kind,
                    name: entry.name,
                });
            }
            grouped.entry(kind).or_default().push(entry);
        }
        Ok(Self { entries: grouped })
    }

    /// Entries of `kind` in their original order; empty when the kind is absent.
    pub fn items_of(&self, kind: ItemKind) -> &[ItemEntry] {
        self.entries.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// First entry named `name`, searching kinds in tag order.
    pub fn find(&self, name: &str) -> Option<(ItemKind, &ItemEntry)> {
        self.iter().find_map(|(kind, entries)| {
            entries
                .iter()
                .find(|entry| entry.name == name)
                .map(|entry| (kind, entry))
        })
    }

    /// Every entry named `name`, one per kind at most.
    pub fn find_all<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (ItemKind, &'a ItemEntry)> + 'a {
        self.iter().filter_map(move |(kind, entries)| {
            entries
                .iter()
                .find(|entry| entry.name == name)
                .map(|entry| (kind, entry))
        })
    }

    /// Kinds that have at least one entry, in tag order.
    pub fn kinds(&self) -> impl Iterator<Item = ItemKind> + '_ {
        self.entries.keys().copied()
    }

    /// Non-empty kinds paired with their entries, in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemKind, &[ItemEntry])> {
        self.entries
            .iter()
            .map(|(kind, entries)| (*kind, entries.as_slice()))
    }

    /// Total number of entries across all kinds.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether the index has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
