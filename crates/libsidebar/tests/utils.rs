// Dead code detection breaks here, because the integration test crates all use a disjoint set of
// the helpers.
#![allow(dead_code)]

use std::collections::HashMap;

use rustdoc_types::{Id, Item, ItemEnum, Module, Use, Visibility};

/// A small rustdoc item index, built up one item at a time.
#[derive(Default)]
pub struct ModelBuilder {
    items: HashMap<Id, Item>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, id: u32, name: &str, docs: Option<&str>, inner: ItemEnum) -> Self {
        self.items.insert(
            Id(id),
            Item {
                id: Id(id),
                crate_id: 0,
                name: Some(name.to_string()),
                span: None,
                visibility: Visibility::Public,
                docs: docs.map(str::to_string),
                links: HashMap::new(),
                attrs: Vec::new(),
                deprecation: None,
                inner,
            },
        );
        self
    }

    pub fn module(self, id: u32, name: &str, docs: Option<&str>, items: &[u32]) -> Self {
        self.item(
            id,
            name,
            docs,
            ItemEnum::Module(Module {
                is_crate: id == 0,
                items: items.iter().copied().map(Id).collect(),
                is_stripped: false,
            }),
        )
    }

    pub fn macro_(self, id: u32, name: &str, docs: Option<&str>) -> Self {
        self.item(
            id,
            name,
            docs,
            ItemEnum::Macro(format!("macro_rules! {name} {{ () => {{}} }}")),
        )
    }

    pub fn reexport(self, id: u32, name: &str, target: u32) -> Self {
        self.item(
            id,
            name,
            None,
            ItemEnum::Use(Use {
                source: format!("crate::{name}"),
                name: name.to_string(),
                id: Some(Id(target)),
                is_glob: false,
            }),
        )
    }

    pub fn private(mut self, id: u32) -> Self {
        if let Some(item) = self.items.get_mut(&Id(id)) {
            item.visibility = Visibility::Crate;
        }
        self
    }

    pub fn build(self) -> HashMap<Id, Item> {
        self.items
    }
}

/// Crate `demo` with two public modules, a private one, and a few macros.
pub fn demo_model() -> HashMap<Id, Item> {
    ModelBuilder::new()
        .module(0, "demo", Some("Demo crate."), &[1, 2, 3, 4, 5])
        .module(1, "pool", Some("Thread pool management.\n\nDetails."), &[10, 11, 12])
        .module(2, "hidden", None, &[20])
        .private(2)
        .macro_(3, "join", Some("Runs two closures, potentially in parallel. See the docs."))
        .macro_(4, "scope", None)
        .module(5, "iter", Some("Parallel iterators."), &[])
        .macro_(10, "spawn", Some("Spawns a job onto the\nglobal pool."))
        .macro_(11, "broadcast", Some("Runs a closure on every thread."))
        .reexport(12, "yield_now", 20)
        .macro_(20, "yield_now", Some("Cooperatively yields execution."))
        .private(20)
        .build()
}
