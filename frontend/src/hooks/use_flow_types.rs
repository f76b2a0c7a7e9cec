use chrono::Local;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::screens::flow_type::{build_rows, FlowTypeAction, FlowTypeScreen};
use shared::screens::list::ListAction;
use crate::context::AppContext;
use crate::hooks::use_screen_store::{log_load_error, use_list_writes, use_screen_store};
use crate::services::api::Resource;
use crate::services::logging::Logger;

const COMPONENT: &str = "use_flow_types";

pub struct UseFlowTypesResult {
    pub state: FlowTypeScreen,
    pub dispatch: Callback<FlowTypeAction>,
}

#[hook]
pub fn use_flow_types(context: &AppContext) -> UseFlowTypesResult {
    let store = {
        let max_types = context.config.max_flow_types;
        use_screen_store(move || FlowTypeScreen::new(max_types))
    };
    let api_client = context.api_client.clone();

    let dispatch = {
        let dispatcher = store.dispatcher();
        use_callback((), move |action: FlowTypeAction, _| dispatcher.dispatch(action))
    };

    use_effect_with(store.0.list.request_generation(), {
        let dispatcher = store.dispatcher();
        let api_client = api_client.clone();
        move |generation| {
            if let Some(generation) = *generation {
                Logger::debug_with_component(COMPONENT, &format!("Fetching flow types, load #{}", generation));
                spawn_local(async move {
                    let action = match api_client.get_flow_types().await {
                        Ok(types) => ListAction::Loaded { generation, view: build_rows(types, &Local) },
                        Err(e) => {
                            log_load_error(COMPONENT, generation, &e);
                            ListAction::LoadFailed { generation }
                        }
                    };
                    dispatcher.dispatch(action);
                });
            }
            || ()
        }
    });

    use_list_writes(COMPONENT, &api_client, Resource::FlowType, store.0.list.outbox.pending().cloned(), dispatch.clone());

    UseFlowTypesResult { state: store.0.clone(), dispatch }
}
