use crate::{
    foundation::names::TypeName,
    model::param::{MethodParam, ParamCategory},
};

/// Return type used when an author does not declare one.
pub const VOID: &str = "void";

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Lifecycle hook a delegate method is bound to.
pub enum DelegateHook {
    /// Builds the component's layout.
    OnCreateLayout,
    /// Seeds initial state values.
    OnCreateInitialState,
    /// Runs before measurement.
    OnPrepare,
    /// Measures the component.
    OnMeasure,
    /// Runs once bounds are known.
    OnBoundsDefined,
    /// Creates mount content.
    OnCreateMountContent,
    /// Mounts content.
    OnMount,
    /// Binds mounted content.
    OnBind,
    /// Unbinds mounted content.
    OnUnbind,
    /// Unmounts content.
    OnUnmount,
    /// Decides whether an update is needed.
    ShouldUpdate,
    /// Creates transitions.
    OnCreateTransition,
    /// Handles errors thrown by the component or its children.
    OnError,
    /// Any hook the engine has no special handling for.
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Kind payload of a delegate method.
pub struct DelegateMethod {
    /// Hook the method implements.
    pub hook: DelegateHook,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Kind payload of event and trigger methods.
pub struct EventMethod;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Kind payload of state-update methods.
pub struct UpdateStateMethod {
    /// Whether the update may be applied lazily.
    #[serde(default)]
    pub lazy: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A field carried by an event.
pub struct FieldModel {
    /// Field name.
    pub name: String,
    /// Field type.
    pub type_name: TypeName,
}

impl FieldModel {
    /// Field with the given name and type.
    pub fn new(name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Declared event type handled by event or trigger methods.
pub struct EventDeclarationModel {
    /// Event type name.
    pub name: TypeName,
    /// Return type of handlers.
    #[serde(default = "void_type")]
    pub return_type: TypeName,
    /// Fields dispatched with the event.
    #[serde(default)]
    pub fields: Vec<FieldModel>,
}

fn void_type() -> TypeName {
    TypeName::new(VOID)
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A spec method with its classified parameters.
///
/// `K` carries the method kind and `E` the event declaration (unit for methods without one).
pub struct SpecMethodModel<K, E> {
    /// Method kind payload.
    pub kind: K,
    /// Method name.
    pub name: String,
    /// Declared return type.
    pub return_type: TypeName,
    /// Parameters in declaration order.
    pub params: Vec<MethodParam>,
    /// Event payload.
    pub event: E,
}

/// Lifecycle delegate method.
pub type DelegateMethodModel = SpecMethodModel<DelegateMethod, ()>;
/// Event handler or trigger method.
pub type EventMethodModel = SpecMethodModel<EventMethod, EventDeclarationModel>;
/// State-update method.
pub type UpdateStateMethodModel = SpecMethodModel<UpdateStateMethod, ()>;

impl<K, E> SpecMethodModel<K, E> {
    /// Same method with another declared return type.
    pub fn with_return_type(mut self, return_type: impl Into<TypeName>) -> Self {
        self.return_type = return_type.into();
        self
    }

    /// Parameters of `category`, in declaration order.
    pub fn params_of(&self, category: ParamCategory) -> impl Iterator<Item = &MethodParam> {
        self.params.iter().filter(move |p| p.category() == category)
    }
}

impl DelegateMethodModel {
    /// Delegate method returning `void`.
    pub fn delegate(hook: DelegateHook, name: impl Into<String>, params: Vec<MethodParam>) -> Self {
        Self {
            kind: DelegateMethod { hook },
            name: name.into(),
            return_type: void_type(),
            params,
            event: (),
        }
    }

    /// Hook this delegate implements.
    pub fn hook(&self) -> &DelegateHook {
        &self.kind.hook
    }
}

impl EventMethodModel {
    /// Event (or trigger) method handling `declaration`.
    pub fn event(
        name: impl Into<String>,
        declaration: EventDeclarationModel,
        params: Vec<MethodParam>,
    ) -> Self {
        Self {
            kind: EventMethod,
            name: name.into(),
            return_type: declaration.return_type.clone(),
            params,
            event: declaration,
        }
    }
}

impl UpdateStateMethodModel {
    /// Eager state-update method.
    pub fn update_state(name: impl Into<String>, params: Vec<MethodParam>) -> Self {
        Self {
            kind: UpdateStateMethod::default(),
            name: name.into(),
            return_type: void_type(),
            params,
            event: (),
        }
    }
}

impl EventDeclarationModel {
    /// Event returning `void` with the given fields.
    pub fn new(name: impl Into<TypeName>, fields: Vec<FieldModel>) -> Self {
        Self {
            name: name.into(),
            return_type: void_type(),
            fields,
        }
    }
}
