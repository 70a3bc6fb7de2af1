use crate::{
    derive::{cached_names::CachedPropNames, canonical::CanonicalSet},
    model::param::{DiffPropModel, InjectPropModel, PropModel},
};

fn prop_with_cached_name(prop: &PropModel, cache: &CachedPropNames, index: usize) -> PropModel {
    match cache.get(index) {
        Some(name) => prop.with_name(name),
        None => prop.clone(),
    }
}

fn inject_prop_with_cached_name(
    prop: &InjectPropModel,
    cache: &CachedPropNames,
    index: usize,
) -> InjectPropModel {
    match cache.get(index) {
        Some(name) => prop.with_name(name),
        None => prop.clone(),
    }
}

/// Final props from raw props (see [`crate::raw_props`]).
///
/// The last `diff_props.len()` raw entries are the diff-derived tail. Base props are renamed
/// from `cache` by raw position, then deduplicated in first-seen order, so the result never
/// holds two props with the same name and type. Each diff prop whose underlying value is not
/// already present is appended, renamed from `cache` at `base_len + diff_index`.
#[tracing::instrument(level = "debug", skip_all, fields(raw = raw.len(), diffs = diff_props.len()))]
pub fn derive_props(
    raw: &[PropModel],
    diff_props: &[DiffPropModel],
    cache: &CachedPropNames,
) -> Vec<PropModel> {
    let base_len = raw.len().saturating_sub(diff_props.len());

    let mut props: CanonicalSet<PropModel> = raw[..base_len]
        .iter()
        .enumerate()
        .map(|(i, prop)| prop_with_cached_name(prop, cache, i))
        .collect();
    if props.len() < base_len {
        tracing::debug!(dropped = base_len - props.len(), "merged duplicate props");
    }

    for (diff_index, diff) in diff_props.iter().enumerate() {
        let index = base_len + diff_index;
        let cached = cache.get(index);
        if props
            .iter()
            .any(|prop| diff.is_same_underlying_prop(prop, cached))
        {
            tracing::trace!(prop = %diff.underlying_prop().name, "diff prop already declared");
            continue;
        }
        props.insert(prop_with_cached_name(diff.underlying_prop(), cache, index));
    }

    props.into_first_seen()
}

/// Inject-props deduplicated in first-seen order, before renaming.
pub fn dedup_inject_props(scanned: Vec<InjectPropModel>) -> Vec<InjectPropModel> {
    scanned
        .into_iter()
        .collect::<CanonicalSet<_>>()
        .into_first_seen()
}

/// Apply cached names to inject-props; positions start at `prop_count`.
pub fn rename_inject_props(
    raw_inject_props: &[InjectPropModel],
    cache: &CachedPropNames,
    prop_count: usize,
) -> Vec<InjectPropModel> {
    raw_inject_props
        .iter()
        .enumerate()
        .map(|(i, prop)| inject_prop_with_cached_name(prop, cache, prop_count + i))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/derive/props.rs"]
mod tests;
