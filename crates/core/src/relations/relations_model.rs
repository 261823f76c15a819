use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An owner entity and the items it references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationEntry<A> {
    pub owner_id: String,
    pub owner_label: String,
    pub items: Vec<RelatedItem<A>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedItem<A> {
    pub item_key: String,
    pub attributes: A,
}

/// One owner referencing an item, as seen from the item's side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvertedEntry<A> {
    pub owner_id: String,
    pub owner_label: String,
    pub attributes: A,
}

/// Item key to the owners referencing it, in first-seen owner order.
///
/// Built wholesale by [`super::invert`]; there is no mutating API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InvertedMap<A> {
    pub(super) entries: HashMap<String, Vec<InvertedEntry<A>>>,
}

impl<A> InvertedMap<A> {
    /// Owners of `item_key`; empty when nothing references it.
    pub fn get(&self, item_key: &str) -> &[InvertedEntry<A>] {
        self.entries.get(item_key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn owner_count(&self, item_key: &str) -> usize {
        self.get(item_key).len()
    }

    pub fn contains_key(&self, item_key: &str) -> bool {
        self.entries.contains_key(item_key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A> Default for InvertedMap<A> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

/// What an institutional filer did with a holding in its latest filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilingAction {
    New,
    Add,
    Reduce,
    Hold,
    SoldOut,
}

/// Per-holding attributes of a smart-money filing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingAttributes {
    pub action: FilingAction,
    #[serde(default)]
    pub shares: Option<Decimal>,
    /// Weight of the holding in the filer's portfolio, in percent.
    #[serde(default)]
    pub portfolio_weight: Option<Decimal>,
}

pub type FilingRelation = RelationEntry<FilingAttributes>;
pub type FilingHolders = InvertedMap<FilingAttributes>;
