use chrono::Local;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::forms::CapitalFlowForm;
use shared::screens::capital_flow::{build_page, CapitalFlowScreen, FlowAction, FlowPageView};
use shared::screens::flow_type::build_rows;
use shared::screens::list::ListAction;
use crate::context::AppContext;
use crate::hooks::use_screen_store::{log_load_error, use_list_writes, use_screen_store};
use crate::services::api::Resource;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

const COMPONENT: &str = "use_capital_flow";

pub type FlowListAction = ListAction<FlowPageView, CapitalFlowForm>;

pub struct UseCapitalFlowResult {
    pub state: CapitalFlowScreen,
    pub actions: UseCapitalFlowActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCapitalFlowActions {
    pub dispatch: Callback<FlowAction>,
    pub list: Callback<FlowListAction>,
}

#[hook]
pub fn use_capital_flow(context: &AppContext) -> UseCapitalFlowResult {
    let store = {
        let config = context.config.clone();
        use_screen_store(move || CapitalFlowScreen::new(&config, today()))
    };
    let api_client = context.api_client.clone();

    let dispatch = {
        let dispatcher = store.dispatcher();
        use_callback((), move |action: FlowAction, _| dispatcher.dispatch(action))
    };

    let list = {
        let dispatcher = store.dispatcher();
        use_callback((), move |action: FlowListAction, _| dispatcher.dispatch(FlowAction::List(action)))
    };

    // Flow types for the selector and the edit modal
    use_effect_with(api_client.clone(), {
        let dispatcher = store.dispatcher();
        move |api_client| {
            let api_client = api_client.clone();
            spawn_local(async move {
                match api_client.get_flow_types().await {
                    Ok(types) => dispatcher.dispatch(FlowAction::CategoriesLoaded(build_rows(types, &Local))),
                    Err(e) => Logger::error_with_component(COMPONENT, &format!("Failed to load flow types: {}", e)),
                }
            });
            || ()
        }
    });

    use_effect_with(store.0.query(&Local), {
        let dispatcher = store.dispatcher();
        let api_client = api_client.clone();
        move |query| {
            if let Some((generation, query)) = query.clone() {
                Logger::debug_with_component(COMPONENT, &format!("Fetching flows, load #{}", generation));
                spawn_local(async move {
                    let action = match api_client.get_capital_flows(&query).await {
                        Ok(page) => ListAction::Loaded { generation, view: build_page(page, &Local) },
                        Err(e) => {
                            log_load_error(COMPONENT, generation, &e);
                            ListAction::LoadFailed { generation }
                        }
                    };
                    dispatcher.dispatch(FlowAction::List(action));
                });
            }
            || ()
        }
    });

    use_list_writes(COMPONENT, &api_client, Resource::CapitalFlow, store.0.list.outbox.pending().cloned(), list.clone());

    UseCapitalFlowResult { state: store.0.clone(), actions: UseCapitalFlowActions { dispatch, list } }
}
