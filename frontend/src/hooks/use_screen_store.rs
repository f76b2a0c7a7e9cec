use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::modal::RecordForm;
use shared::outbox::{WriteOutcome, WriteTicket};
use shared::screens::list::{ListAction, ListCommand};
use shared::{ApiError, ScreenState};
use crate::services::api::{ApiClient, Resource};
use crate::services::logging::Logger;

/// Reducer wrapper around a screen state machine
#[derive(Clone, PartialEq)]
pub struct Store<S>(pub S);

impl<S: ScreenState> Reducible for Store<S> {
    type Action = S::Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(Store(state))
    }
}

#[hook]
pub fn use_screen_store<S, F>(init: F) -> UseReducerHandle<Store<S>>
where
    S: ScreenState + 'static,
    F: FnOnce() -> S,
{
    use_reducer(move || Store(init()))
}

pub fn write_outcome(component: &str, result: Result<(), ApiError>) -> WriteOutcome {
    match result {
        Ok(()) => WriteOutcome::Succeeded,
        Err(e) if e.is_rejection() => {
            Logger::warn_with_component(component, &e.to_string());
            WriteOutcome::Rejected
        }
        Err(e) => {
            Logger::error_with_component(component, &format!("Write failed: {}", e));
            WriteOutcome::Failed
        }
    }
}

/// Send the screen's pending write, if any, and report its outcome back.
///
/// Keyed on the ticket itself, so each ticket is sent exactly once.
#[hook]
pub fn use_list_writes<V, F>(
    component: &'static str,
    api_client: &ApiClient,
    resource: Resource,
    ticket: Option<WriteTicket<ListCommand<F::Payload>>>,
    dispatch: Callback<ListAction<V, F>>,
) where
    V: 'static,
    F: RecordForm + 'static,
    F::Payload: serde::Serialize + 'static,
{
    let api_client = api_client.clone();
    use_effect_with(ticket, move |ticket| {
        if let Some(ticket) = ticket.clone() {
            spawn_local(async move {
                let result = match &ticket.command {
                    ListCommand::Save(request) => {
                        Logger::debug_with_component(component, &format!("Saving write #{}", ticket.id));
                        api_client.save(resource, request).await
                    }
                    ListCommand::Delete(ids) => {
                        Logger::debug_with_component(component, &format!("Deleting {:?}", ids));
                        api_client.delete(resource, ids).await
                    }
                };
                let outcome = write_outcome(component, result);
                dispatch.emit(ListAction::WriteFinished { id: ticket.id, outcome });
            });
        }
        || ()
    });
}

/// Log a failed list load. Rejections are expected and stay at warn level.
pub fn log_load_error(component: &str, generation: u64, error: &ApiError) {
    if error.is_rejection() {
        Logger::warn_with_component(component, &format!("Load #{} rejected: {}", generation, error));
    } else {
        Logger::error_with_component(component, &format!("Load #{} failed: {}", generation, error));
    }
}
