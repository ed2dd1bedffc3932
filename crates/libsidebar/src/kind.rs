//! Item kinds that appear as sections of a module sidebar.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SidebarError;

/// Category of a documented item, as used for the keys of a sidebar index.
///
/// Variants are declared in the lexical order of their tags, so the derived
/// `Ord` matches the key order of serialized indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Attribute procedural macro.
    Attr,
    /// Top-level constant.
    Const,
    /// Derive procedural macro.
    Derive,
    /// Enum definition.
    Enum,
    /// `extern crate` declaration.
    ExternCrate,
    /// Free function.
    Fn,
    /// Type declared in an `extern` block.
    ForeignType,
    /// Documented language keyword.
    Keyword,
    /// Declarative or function-like procedural macro.
    Macro,
    /// Module.
    Mod,
    /// Primitive type.
    Primitive,
    /// Static item.
    Static,
    /// Struct definition.
    Struct,
    /// Trait definition.
    Trait,
    /// Trait alias.
    TraitAlias,
    /// Type alias.
    Type,
    /// Union definition.
    Union,
}

impl ItemKind {
    /// Every kind, in key order.
    pub const ALL: [Self; 17] = [
        Self::Attr,
        Self::Const,
        Self::Derive,
        Self::Enum,
        Self::ExternCrate,
        Self::Fn,
        Self::ForeignType,
        Self::Keyword,
        Self::Macro,
        Self::Mod,
        Self::Primitive,
        Self::Static,
        Self::Struct,
        Self::Trait,
        Self::TraitAlias,
        Self::Type,
        Self::Union,
    ];

    /// Tag used for this kind in serialized indexes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Attr => "attr",
            Self::Const => "const",
            Self::Derive => "derive",
            Self::Enum => "enum",
            Self::ExternCrate => "externcrate",
            Self::Fn => "fn",
            Self::ForeignType => "foreigntype",
            Self::Keyword => "keyword",
            Self::Macro => "macro",
            Self::Mod => "mod",
            Self::Primitive => "primitive",
            Self::Static => "static",
            Self::Struct => "struct",
            Self::Trait => "trait",
            Self::TraitAlias => "traitalias",
            Self::Type => "type",
            Self::Union => "union",
        }
    }

    /// Human-friendly section heading for the kind.
    pub fn label(self) -> &'static str {
        match self {
            Self::Attr => "Attribute Macros",
            Self::Const => "Constants",
            Self::Derive => "Derive Macros",
            Self::Enum => "Enums",
            Self::ExternCrate => "Crates",
            Self::Fn => "Functions",
            Self::ForeignType => "Foreign Types",
            Self::Keyword => "Keywords",
            Self::Macro => "Macros",
            Self::Mod => "Modules",
            Self::Primitive => "Primitive Types",
            Self::Static => "Statics",
            Self::Struct => "Structs",
            Self::Trait => "Traits",
            Self::TraitAlias => "Trait Aliases",
            Self::Type => "Type Aliases",
            Self::Union => "Unions",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = SidebarError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| SidebarError::UnknownKind(tag.to_string()))
    }
}
