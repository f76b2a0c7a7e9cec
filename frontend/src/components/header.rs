use yew::prelude::*;
use shared::UserInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    CapitalFlow,
    FlowType,
    Reminder,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::CapitalFlow, Tab::FlowType, Tab::Reminder];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::CapitalFlow => "Capital flow",
            Tab::FlowType => "Flow types",
            Tab::Reminder => "Reminders",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_tab: Tab,
    pub on_select_tab: Callback<Tab>,
    pub user: Option<UserInfo>,
    pub user_loading: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Flow Tracker"}</h1>
                <nav class="header-tabs">
                    {for Tab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        let on_select_tab = props.on_select_tab.clone();
                        html! {
                            <button
                                type="button"
                                class={classes!("tab", (tab == props.active_tab).then_some("active"))}
                                onclick={Callback::from(move |_: MouseEvent| on_select_tab.emit(tab))}
                            >
                                {tab.label()}
                            </button>
                        }
                    })}
                </nav>
                <div class="header-right">
                    <span class="user-name">
                        {if props.user_loading {
                            "Loading...".to_string()
                        } else if let Some(user) = &props.user {
                            user.login_name.clone()
                        } else {
                            "Not signed in".to_string()
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}
