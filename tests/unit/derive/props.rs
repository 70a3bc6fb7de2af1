use super::*;

fn p(name: &str) -> PropModel {
    PropModel::new(name, "String")
}

fn diff(name: &str) -> DiffPropModel {
    DiffPropModel::new(p(name))
}

fn cache(names: &[&str]) -> CachedPropNames {
    names.iter().map(|n| n.to_string()).collect()
}

fn names(props: &[PropModel]) -> Vec<&str> {
    props.iter().map(|p| p.name.as_str()).collect()
}

/// Raw props as extraction would produce them: base then one entry per diff prop.
fn raw(base: &[PropModel], diffs: &[DiffPropModel]) -> Vec<PropModel> {
    base.iter()
        .cloned()
        .chain(diffs.iter().map(|d| d.underlying_prop().clone()))
        .collect()
}

#[test]
fn identical_props_collapse_to_one() {
    let props = derive_props(&[p("title"), p("title")], &[], &CachedPropNames::default());
    assert_eq!(names(&props), ["title"]);
}

#[test]
fn first_seen_order_is_kept() {
    let props = derive_props(
        &[p("zeta"), p("alpha"), p("zeta"), p("mid")],
        &[],
        &CachedPropNames::default(),
    );
    assert_eq!(names(&props), ["zeta", "alpha", "mid"]);
}

#[test]
fn diff_of_declared_prop_adds_nothing() {
    let diffs = [diff("title")];
    let props = derive_props(
        &raw(&[p("title"), p("count")], &diffs),
        &diffs,
        &CachedPropNames::default(),
    );
    assert_eq!(names(&props), ["title", "count"]);
}

#[test]
fn diff_only_props_append_after_base_in_scan_order() {
    let diffs = [diff("second"), diff("first")];
    let props = derive_props(
        &raw(&[p("base")], &diffs),
        &diffs,
        &CachedPropNames::default(),
    );
    assert_eq!(names(&props), ["base", "second", "first"]);
}

#[test]
fn repeated_diff_only_prop_is_added_once() {
    let diffs = [diff("shared"), diff("shared")];
    let props = derive_props(&raw(&[], &diffs), &diffs, &CachedPropNames::default());
    assert_eq!(names(&props), ["shared"]);
}

#[test]
fn diff_with_other_type_is_not_the_same_value() {
    let diffs = [DiffPropModel::new(PropModel::new("title", "CharSequence"))];
    let props = derive_props(
        &raw(&[p("title")], &diffs),
        &diffs,
        &CachedPropNames::default(),
    );
    assert_eq!(props.len(), 2);
    assert_eq!(props[1].type_name.as_str(), "CharSequence");
}

#[test]
fn cached_names_apply_by_position() {
    let props = derive_props(&[p("a"), p("b"), p("c")], &[], &cache(&["x", "y"]));
    assert_eq!(names(&props), ["x", "y", "c"]);
}

#[test]
fn cached_names_rename_diff_only_props_at_offset_positions() {
    let diffs = [diff("extra")];
    let props = derive_props(&raw(&[p("a")], &diffs), &diffs, &cache(&["x", "y"]));
    assert_eq!(names(&props), ["x", "y"]);
}

#[test]
fn diff_matches_base_prop_through_cached_name() {
    let diffs = [diff("title")];
    let props = derive_props(
        &raw(&[p("title")], &diffs),
        &diffs,
        &cache(&["heading", "heading"]),
    );
    assert_eq!(names(&props), ["heading"]);
}

#[test]
fn diff_matches_prop_declared_under_cached_name() {
    let diffs = [diff("title")];
    let props = derive_props(
        &raw(&[p("heading")], &diffs),
        &diffs,
        &cache(&["heading", "heading"]),
    );
    assert_eq!(names(&props), ["heading"]);
}

#[test]
fn cached_names_follow_raw_positions() {
    let props = derive_props(
        &[p("title"), p("title"), p("count")],
        &[],
        &cache(&["x", "y"]),
    );
    assert_eq!(names(&props), ["x", "y", "count"]);
}

#[test]
fn shifted_cache_collapses_onto_existing_names() {
    let props = derive_props(&[p("z"), p("a"), p("b")], &[], &cache(&["a", "b"]));
    assert_eq!(names(&props), ["a", "b"]);
}

#[test]
fn no_duplicates_under_any_cache() {
    let raw_props = [p("z"), p("a"), p("b"), p("a"), p("c")];
    let diffs = [diff("a"), diff("d"), diff("z")];
    let raw = raw(&raw_props, &diffs);
    let caches: [&[&str]; 6] = [
        &[],
        &["a", "b"],
        &["b", "b", "b", "b"],
        &["c", "z", "a", "d", "d", "a", "z", "b"],
        &["d", "d", "d", "d", "d", "d", "d", "d"],
        &["x"],
    ];
    for names_in_cache in caches {
        let props = derive_props(&raw, &diffs, &cache(names_in_cache));
        let mut keys: Vec<_> = props
            .iter()
            .map(|p| (p.name.as_str(), p.type_name.as_str()))
            .collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total, "cache {names_in_cache:?} produced {props:?}");
    }
}

#[test]
fn diff_prop_reads_cache_after_raw_base_with_duplicates() {
    let diffs = [DiffPropModel::new(PropModel::new("count", "int"))];
    let props = derive_props(
        &raw(&[p("title"), p("title")], &diffs),
        &diffs,
        &cache(&["x", "x", "cnt"]),
    );
    let renamed: Vec<_> = props
        .iter()
        .map(|p| format!("{}:{}", p.name, p.type_name))
        .collect();
    assert_eq!(renamed, ["x:String", "cnt:int"]);
}

#[test]
fn short_cache_leaves_tail_untouched() {
    let diffs = [diff("extra")];
    let props = derive_props(&raw(&[p("a"), p("b")], &diffs), &diffs, &cache(&["x"]));
    assert_eq!(names(&props), ["x", "b", "extra"]);
}

#[test]
fn inject_props_dedup_then_rename_after_props() {
    let scanned = vec![
        InjectPropModel::new("apiClient", "ApiClient"),
        InjectPropModel::new("logger", "Logger"),
        InjectPropModel::new("apiClient", "ApiClient"),
    ];
    let raw = dedup_inject_props(scanned);
    assert_eq!(raw.len(), 2);

    let renamed = rename_inject_props(&raw, &cache(&["p0", "p1", "api"]), 2);
    assert_eq!(renamed[0].name, "api");
    assert_eq!(renamed[1].name, "logger");
}
