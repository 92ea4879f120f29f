use super::{EntityReferences, FlowStore};
use crate::action::ActionNode;
use crate::convert::LayoutConfig;

pub struct FlowStoreBuilder {
    layout: LayoutConfig,
    references: EntityReferences,
    tree: Option<ActionNode>,
}

impl FlowStoreBuilder {
    pub fn new() -> Self {
        Self {
            layout: LayoutConfig::default(),
            references: EntityReferences::default(),
            tree: None,
        }
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_references(mut self, references: EntityReferences) -> Self {
        self.references = references;
        self
    }

    /// A tree to materialize as soon as the store is built.
    pub fn with_tree(mut self, tree: ActionNode) -> Self {
        self.tree = Some(tree);
        self
    }

    pub fn build(self) -> FlowStore {
        let mut store = FlowStore::empty(self.layout, self.references);
        if let Some(tree) = self.tree {
            store.load(tree);
        }
        store
    }
}

impl Default for FlowStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
