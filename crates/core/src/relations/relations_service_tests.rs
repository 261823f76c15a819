use super::*;
use rust_decimal_macros::dec;

fn entry(owner: &str, keys: &[&str]) -> RelationEntry<()> {
    RelationEntry {
        owner_id: owner.to_lowercase(),
        owner_label: owner.to_string(),
        items: keys
            .iter()
            .map(|k| RelatedItem {
                item_key: k.to_string(),
                attributes: (),
            })
            .collect(),
    }
}

fn labels<A>(entries: &[InvertedEntry<A>]) -> Vec<&str> {
    entries.iter().map(|e| e.owner_label.as_str()).collect()
}

#[test]
fn test_invert_preserves_owner_order() {
    let inverted = invert(&[entry("A", &["X"]), entry("B", &["X", "Y"])]);

    assert_eq!(labels(inverted.get("X")), vec!["A", "B"]);
    assert_eq!(labels(inverted.get("Y")), vec!["B"]);
    assert_eq!(inverted.len(), 2);
}

#[test]
fn test_invert_keeps_multiplicity_without_dedup() {
    let inverted = invert(&[
        entry("A", &["X"]),
        entry("B", &["X"]),
        entry("C", &["X"]),
        entry("A", &["X"]),
    ]);
    assert_eq!(inverted.owner_count("X"), 4);
    assert_eq!(labels(inverted.get("X")), vec!["A", "B", "C", "A"]);
}

#[test]
fn test_invert_unknown_key_is_empty() {
    let inverted = invert(&[entry("A", &["X"])]);
    assert!(inverted.get("Z").is_empty());
    assert!(!inverted.contains_key("Z"));

    let empty = invert::<()>(&[]);
    assert!(empty.is_empty());
}

#[test]
fn test_invert_carries_filing_attributes() {
    let filings: Vec<FilingRelation> = serde_json::from_str(
        r#"[
            {"ownerId": "f1", "ownerLabel": "Fund One", "items": [
                {"itemKey": "AAPL", "attributes": {"action": "add", "shares": 1200, "portfolioWeight": 4.5}},
                {"itemKey": "MSFT", "attributes": {"action": "new"}}
            ]},
            {"ownerId": "f2", "ownerLabel": "Fund Two", "items": [
                {"itemKey": "AAPL", "attributes": {"action": "reduce", "shares": 300}}
            ]}
        ]"#,
    )
    .unwrap();

    let holders: FilingHolders = invert(&filings);
    let aapl = holders.get("AAPL");
    assert_eq!(aapl.len(), 2);
    assert_eq!(aapl[0].owner_id, "f1");
    assert_eq!(aapl[0].attributes.action, FilingAction::Add);
    assert_eq!(aapl[0].attributes.portfolio_weight, Some(dec!(4.5)));
    assert_eq!(aapl[1].attributes.action, FilingAction::Reduce);
    assert_eq!(aapl[1].attributes.portfolio_weight, None);
    assert_eq!(labels(holders.get("MSFT")), vec!["Fund One"]);
}

#[test]
fn test_invert_is_recomputed_wholesale() {
    let first = invert(&[entry("A", &["X"])]);
    let second = invert(&[entry("B", &["Y"])]);
    assert!(first.contains_key("X"));
    assert!(!second.contains_key("X"));
    assert_eq!(labels(second.get("Y")), vec!["B"]);
}
