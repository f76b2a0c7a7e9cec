pub mod create_type_modal;
pub mod view;

pub use view::FlowTypeView;
