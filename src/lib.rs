//! Spec-model derivation engine.
//!
//! Turns the classified methods of a declarative component spec into an immutable
//! [`SpecModel`]: deduplicated props and inject-props with names stable across
//! recompilations, canonical state/tree/inter-stage values, and synthesized event methods.
//!
//! - Describe a spec with [`SpecModel::builder`] or load a [`SpecDocument`]
//! - [`SpecModelBuilder::build`] validates and derives
//! - Persist [`CachedPropNames::from_model`] and feed it into the next build
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod derive;
mod foundation;
mod input;
mod model;
mod spec;

pub use derive::{
    cached_names::CachedPropNames,
    canonical::CanonicalKey,
    classify::{ParamMarker, RawParam, classify},
    extract::{MethodGroups, diff_props, diff_state_values, raw_props, scanned_inject_props},
    props::{dedup_inject_props, derive_props, rename_inject_props},
    synthetic::{
        CONTEXT_TYPE, DEFAULT_RULES, ERROR_EVENT_TYPE, ERROR_HANDLER_NAME, EXCEPTION_TYPE,
        FROM_EVENT, OnErrorHandlerRule, SyntheticEventRule, combined_event_methods,
    },
    values::{
        derive_inter_stage_inputs, derive_render_data_diffs, derive_state_values,
        derive_tree_props,
    },
};
pub use foundation::{
    error::{SpecModelError, SpecModelResult},
    names::{SPEC_SUFFIX, TypeName, component_type_name, package_prefix, simple_name},
};
pub use input::document::{DelegateMethodDoc, EventMethodDoc, SpecDocument, UpdateStateMethodDoc};
pub use model::{
    metadata::{
        BuilderMethodModel, DependencyInjectionHelper, PropDefaultModel, PropJavadocModel,
        SourceAnchor, SpecElementType, TagModel, TypeVariable,
    },
    method::{
        DelegateHook, DelegateMethod, DelegateMethodModel, EventDeclarationModel, EventMethod,
        EventMethodModel, FieldModel, SpecMethodModel, UpdateStateMethod, UpdateStateMethodModel,
        VOID,
    },
    param::{
        DIFF_CONTAINER, DiffPropModel, DiffStateParamModel, InjectPropModel, InterStageInputModel,
        MethodParam, ParamCategory, ParamModel, PropModel, RenderDataDiffModel, SimpleParamModel,
        StateParamModel, TreePropModel,
    },
};
pub use spec::{
    builder::SpecModelBuilder,
    fingerprint::{ModelFingerprint, fingerprint_model},
    model::SpecModel,
};
