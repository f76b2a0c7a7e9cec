use chrono::Local;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::forms::ReminderForm;
use shared::screens::list::ListAction;
use shared::screens::reminder::{build_page, ReminderAction, ReminderPageView, ReminderScreen};
use crate::context::AppContext;
use crate::hooks::use_screen_store::{log_load_error, use_list_writes, use_screen_store};
use crate::services::api::Resource;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

const COMPONENT: &str = "use_reminders";

pub type ReminderListAction = ListAction<ReminderPageView, ReminderForm>;

pub struct UseRemindersResult {
    pub state: ReminderScreen,
    pub actions: UseRemindersActions,
}

#[derive(Clone, PartialEq)]
pub struct UseRemindersActions {
    pub dispatch: Callback<ReminderAction>,
    pub list: Callback<ReminderListAction>,
}

#[hook]
pub fn use_reminders(context: &AppContext) -> UseRemindersResult {
    let store = {
        let config = context.config.clone();
        use_screen_store(move || ReminderScreen::new(&config, today()))
    };
    let api_client = context.api_client.clone();

    let dispatch = {
        let dispatcher = store.dispatcher();
        use_callback((), move |action: ReminderAction, _| dispatcher.dispatch(action))
    };

    let list = {
        let dispatcher = store.dispatcher();
        use_callback((), move |action: ReminderListAction, _| dispatcher.dispatch(ReminderAction::List(action)))
    };

    // The email check runs whenever the user info arrives
    use_effect_with(context.user.clone(), {
        let dispatcher = store.dispatcher();
        move |user| {
            if let Some(user) = user.clone() {
                if !user.has_email() {
                    Logger::info_with_component(COMPONENT, "No public email address, reminders cannot be delivered");
                }
                dispatcher.dispatch(ReminderAction::UserLoaded(user));
            }
            || ()
        }
    });

    use_effect_with(store.0.query(&Local), {
        let dispatcher = store.dispatcher();
        let api_client = api_client.clone();
        move |query| {
            if let Some((generation, query)) = query.clone() {
                Logger::debug_with_component(COMPONENT, &format!("Fetching reminders, load #{}", generation));
                spawn_local(async move {
                    let action = match api_client.get_reminders(&query).await {
                        Ok(page) => ListAction::Loaded { generation, view: build_page(page, &Local) },
                        Err(e) => {
                            log_load_error(COMPONENT, generation, &e);
                            ListAction::LoadFailed { generation }
                        }
                    };
                    dispatcher.dispatch(ReminderAction::List(action));
                });
            }
            || ()
        }
    });

    use_list_writes(COMPONENT, &api_client, Resource::Reminder, store.0.list.outbox.pending().cloned(), list.clone());

    UseRemindersResult { state: store.0.clone(), actions: UseRemindersActions { dispatch, list } }
}
