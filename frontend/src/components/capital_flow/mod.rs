pub mod create_capital_flow_modal;
pub mod query_panel;
pub mod view;

pub use view::CapitalFlowView;
