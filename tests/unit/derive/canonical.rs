use super::*;
use crate::model::param::PropModel;

fn names(props: &[PropModel]) -> Vec<&str> {
    props.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn first_insertion_wins() {
    let mut set = CanonicalSet::new();
    assert!(set.insert(PropModel::new("title", "String").doc("first")));
    assert!(!set.insert(PropModel::new("title", "String").doc("second")));
    assert_eq!(set.len(), 1);
    let items = set.into_first_seen();
    assert_eq!(items[0].doc.as_deref(), Some("first"));
}

#[test]
fn same_name_different_type_is_distinct() {
    let set: CanonicalSet<_> = [
        PropModel::new("title", "String"),
        PropModel::new("title", "CharSequence"),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn orders_are_first_seen_and_canonical() {
    let set: CanonicalSet<_> = [
        PropModel::new("zeta", "int"),
        PropModel::new("alpha", "String"),
        PropModel::new("mid", "int"),
        PropModel::new("alpha", "String"),
    ]
    .into_iter()
    .collect();
    assert_eq!(names(&set.clone().into_first_seen()), ["zeta", "alpha", "mid"]);
    assert_eq!(names(&set.into_canonical_order()), ["alpha", "mid", "zeta"]);
}

#[test]
fn canonical_order_breaks_name_ties_by_type() {
    let set: CanonicalSet<_> = [
        PropModel::new("value", "long"),
        PropModel::new("value", "int"),
    ]
    .into_iter()
    .collect();
    let ordered = set.into_canonical_order();
    assert_eq!(ordered[0].type_name.as_str(), "int");
    assert_eq!(ordered[1].type_name.as_str(), "long");
}
