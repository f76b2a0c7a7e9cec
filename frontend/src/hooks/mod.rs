pub mod use_capital_flow;
pub mod use_flow_types;
pub mod use_reminders;
pub mod use_screen_store;
pub mod use_user_info;
