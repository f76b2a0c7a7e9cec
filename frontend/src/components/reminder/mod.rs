pub mod contact_notice;
pub mod create_reminder_modal;
pub mod query_panel;
pub mod view;

pub use view::ReminderView;
