use crate::model::{
    method::{
        DelegateHook, DelegateMethodModel, EventDeclarationModel, EventMethodModel, FieldModel,
    },
    param::{MethodParam, SimpleParamModel},
};

/// Name of the synthesized error handler.
pub const ERROR_HANDLER_NAME: &str = "__internalOnErrorHandler";
/// Event type dispatched to the synthesized error handler.
pub const ERROR_EVENT_TYPE: &str = "ErrorEvent";
/// Context type passed as the first handler parameter.
pub const CONTEXT_TYPE: &str = "ComponentContext";
/// Type of the error carried by [`ERROR_EVENT_TYPE`].
pub const EXCEPTION_TYPE: &str = "Exception";
/// Annotation marking a handler parameter as read from the event.
pub const FROM_EVENT: &str = "FromEvent";

/// Derives a companion event method from the delegate methods of a spec.
pub trait SyntheticEventRule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether the delegates carry the hook this rule reacts to.
    fn applies(&self, delegates: &[DelegateMethodModel]) -> bool;

    /// The event method to add.
    fn synthesize(&self) -> EventMethodModel;
}

/// Adds an internal error handler when a delegate implements [`DelegateHook::OnError`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OnErrorHandlerRule;

impl SyntheticEventRule for OnErrorHandlerRule {
    fn name(&self) -> &'static str {
        "on_error_handler"
    }

    fn applies(&self, delegates: &[DelegateMethodModel]) -> bool {
        delegates.iter().any(|m| *m.hook() == DelegateHook::OnError)
    }

    fn synthesize(&self) -> EventMethodModel {
        let declaration = EventDeclarationModel::new(
            ERROR_EVENT_TYPE,
            vec![FieldModel::new("exception", EXCEPTION_TYPE)],
        );
        let exception = SimpleParamModel {
            annotations: vec![FROM_EVENT.to_string()],
            ..SimpleParamModel::new("exception", EXCEPTION_TYPE)
        };
        EventMethodModel::event(
            ERROR_HANDLER_NAME,
            declaration,
            vec![
                MethodParam::Plain(SimpleParamModel::new("c", CONTEXT_TYPE)),
                MethodParam::Plain(exception),
            ],
        )
    }
}

/// Rules applied by the builder, in order.
pub static DEFAULT_RULES: &[&dyn SyntheticEventRule] = &[&OnErrorHandlerRule];

/// Authored event methods followed by one synthesized method per applicable rule.
pub fn combined_event_methods(
    delegates: &[DelegateMethodModel],
    events: Vec<EventMethodModel>,
    rules: &[&dyn SyntheticEventRule],
) -> Vec<EventMethodModel> {
    let mut combined = events;
    for rule in rules {
        if rule.applies(delegates) {
            tracing::debug!(rule = rule.name(), "synthesizing event method");
            combined.push(rule.synthesize());
        }
    }
    combined
}

#[cfg(test)]
#[path = "../../tests/unit/derive/synthetic.rs"]
mod tests;
