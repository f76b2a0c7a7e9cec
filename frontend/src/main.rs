use yew::prelude::*;

mod components;
mod context;
mod hooks;
mod services;

use components::capital_flow::CapitalFlowView;
use components::flow_type::FlowTypeView;
use components::header::{Header, Tab};
use components::reminder::ReminderView;
use context::{build_config, AppContext};
use hooks::use_user_info::use_user_info;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let base_context = use_memo((), |_| {
        let config = build_config();
        Logger::init(config.log_level);
        Logger::info_with_component("app", &format!("Starting with API at {}", config.api_base_url));
        AppContext::new(config)
    });
    let active_tab = use_state(|| Tab::CapitalFlow);
    let user_info = use_user_info(&base_context.api_client);

    let context = AppContext { user: user_info.user.clone(), ..(*base_context).clone() };

    let on_select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| {
            Logger::debug_with_component("app", &format!("Switching to {}", tab.label()));
            active_tab.set(tab);
        })
    };

    let content = match *active_tab {
        Tab::CapitalFlow => html! { <CapitalFlowView /> },
        Tab::FlowType => html! { <FlowTypeView /> },
        Tab::Reminder => html! { <ReminderView /> },
    };

    html! {
        <ContextProvider<AppContext> context={context}>
            <div class="app">
                <Header
                    active_tab={*active_tab}
                    {on_select_tab}
                    user={user_info.user.clone()}
                    user_loading={user_info.loading}
                />
                <main class="main">
                    <div class="container">
                        {content}
                    </div>
                </main>
            </div>
        </ContextProvider<AppContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
