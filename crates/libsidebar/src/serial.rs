//! Serde support for the `{ kind: [[name, summary], ...] }` record shape.
//!
//! Deserialization validates the same invariants as
//! [`ModuleIndex::build`]: unknown kinds, repeated kinds and duplicate or
//! empty names are rejected, and empty kind lists are dropped.

use std::{collections::HashSet, fmt};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor},
};

use crate::{
    index::{ItemEntry, ModuleIndex},
    kind::ItemKind,
};

impl Serialize for ItemEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.name, &self.summary).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ItemEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (name, summary) = <(String, String)>::deserialize(deserializer)?;
        Ok(Self { name, summary })
    }
}

impl Serialize for ModuleIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for ModuleIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ModuleIndexVisitor)
    }
}

/// Map visitor that checks kind tags as they are read.
struct ModuleIndexVisitor;

impl<'de> Visitor<'de> for ModuleIndexVisitor {
    type Value = ModuleIndex;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map from item kind to a list of [name, summary] pairs")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut kinds = HashSet::new();
        let mut entries = Vec::new();
        while let Some(tag) = map.next_key::<String>()? {
            let kind: ItemKind = tag.parse().map_err(de::Error::custom)?;
            if !kinds.insert(kind) {
                return Err(de::Error::custom(format!("duplicate item kind: {kind}")));
            }
            let items: Vec<ItemEntry> = map.next_value()?;
            entries.extend(items.into_iter().map(|entry| (kind, entry)));
        }
        ModuleIndex::from_entries(entries).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{
        index::{ItemEntry, ModuleIndex, RawItem},
        kind::ItemKind,
    };

    fn sample() -> ModuleIndex {
        ModuleIndex::build(vec![
            RawItem::new("ThreadPool", "struct", None),
            RawItem::new(
                "Configuration",
                "struct",
                Some("Contains the rayon thread pool configuration.".to_string()),
            ),
            RawItem::new("join", "fn", None),
        ])
        .unwrap()
    }

    #[test]
    fn serializes_to_kind_keyed_pairs() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "fn": [["join", ""]],
                "struct": [
                    ["ThreadPool", ""],
                    ["Configuration", "Contains the rayon thread pool configuration."]
                ]
            })
        );
        assert_eq!(
            serde_json::to_string(&sample()).unwrap(),
            r#"{"fn":[["join",""]],"struct":[["ThreadPool",""],["Configuration","Contains the rayon thread pool configuration."]]}"#
        );
    }

    #[test]
    fn round_trips_through_json() {
        let index = sample();
        let text = serde_json::to_string(&index).unwrap();
        let back: ModuleIndex = serde_json::from_str(&text).unwrap();
        assert_eq!(back, index);

        let empty = ModuleIndex::default();
        let back: ModuleIndex =
            serde_json::from_str(&serde_json::to_string(&empty).unwrap()).unwrap();
        assert_eq!(back, empty);
    }

    #[test]
    fn empty_kind_lists_equal_missing_kinds() {
        let with_empty: ModuleIndex =
            serde_json::from_str(r#"{"enum":[],"fn":[["join",""]],"trait":[]}"#).unwrap();
        let without: ModuleIndex = serde_json::from_str(r#"{"fn":[["join",""]]}"#).unwrap();
        assert_eq!(with_empty, without);
        assert_eq!(with_empty.kinds().collect::<Vec<_>>(), vec![ItemKind::Fn]);
        assert!(with_empty.items_of(ItemKind::Enum).is_empty());
    }

    #[test]
    fn deserialization_preserves_entry_order() {
        let index: ModuleIndex =
            serde_json::from_str(r#"{"struct":[["Zed",""],["Alpha","First."]]}"#).unwrap();
        assert_eq!(
            index.items_of(ItemKind::Struct),
            &[ItemEntry::new("Zed", ""), ItemEntry::new("Alpha", "First.")]
        );
    }

    #[test]
    fn deserialization_rejects_invalid_records() {
        let unknown = serde_json::from_str::<ModuleIndex>(r#"{"widget":[["a",""]]}"#);
        assert!(unknown.unwrap_err().to_string().contains("Unknown item kind: widget"));

        let duplicate = serde_json::from_str::<ModuleIndex>(r#"{"fn":[["a",""],["a","x"]]}"#);
        assert!(duplicate.unwrap_err().to_string().contains("Duplicate fn item"));

        let repeated_kind = serde_json::from_str::<ModuleIndex>(r#"{"fn":[["a",""]],"fn":[]}"#);
        assert!(
            repeated_kind
                .unwrap_err()
                .to_string()
                .contains("duplicate item kind: fn")
        );

        let empty_name = serde_json::from_str::<ModuleIndex>(r#"{"fn":[["",""]]}"#);
        assert!(empty_name.is_err());

        let two_lines = serde_json::from_str::<ModuleIndex>(r#"{"fn":[["a","One.\nTwo."]]}"#);
        assert!(
            two_lines
                .unwrap_err()
                .to_string()
                .contains("Multi-line summary for fn item: a")
        );

        let wrong_shape = serde_json::from_str::<ModuleIndex>(r#"{"fn":[["a"]]}"#);
        assert!(wrong_shape.is_err());

        let not_a_map = serde_json::from_str::<ModuleIndex>(r#"[["fn", []]]"#);
        assert!(not_a_map.is_err());
    }
}
