use log::debug;
use std::collections::HashMap;

use super::{InvertedEntry, InvertedMap, RelationEntry};

/// Inverts owner → items into item key → owners.
///
/// Every reference is kept, including identical ones from different owners,
/// and each item's owners appear in the order the owners were given.
pub fn invert<A: Clone>(entries: &[RelationEntry<A>]) -> InvertedMap<A> {
    let mut inverted: HashMap<String, Vec<InvertedEntry<A>>> = HashMap::new();

    for entry in entries {
        for item in &entry.items {
            inverted
                .entry(item.item_key.clone())
                .or_default()
                .push(InvertedEntry {
                    owner_id: entry.owner_id.clone(),
                    owner_label: entry.owner_label.clone(),
                    attributes: item.attributes.clone(),
                });
        }
    }

    debug!(
        "Inverted {} owners into {} item keys",
        entries.len(),
        inverted.len()
    );

    InvertedMap { entries: inverted }
}
