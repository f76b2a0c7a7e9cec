pub mod capital_flow;
pub mod confirm_dialog;
pub mod data_table;
pub mod date_range_picker;
pub mod flow_type;
pub mod header;
pub mod modal;
pub mod notice_toast;
pub mod reminder;
