use yew::prelude::*;
use shared::screens::flow_type::FlowTypeRow;
use shared::screens::list::ListAction;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::data_table::{Column, DataTable};
use crate::components::notice_toast::NoticeToast;
use crate::context::AppContext;
use crate::hooks::use_flow_types::use_flow_types;
use crate::services::date_utils::now_millis;
use super::create_type_modal::CreateTypeModal;

/// Category management tab
#[function_component(FlowTypeView)]
pub fn flow_type_view() -> Html {
    let context = use_context::<AppContext>().unwrap_or_default();
    let result = use_flow_types(&context);
    let state = &result.state;
    let dispatch = result.dispatch.clone();

    let columns = {
        let dispatch = dispatch.clone();
        use_memo((), move |_| {
            vec![
                Column::new("Kind", "type", |row: &FlowTypeRow| html! {
                    <span class="tag" style={format!("color: {}", row.color)}>{row.kind_label}</span>
                })
                .width(120),
                Column::new("Name", "name", |row: &FlowTypeRow| html! { {&row.record.name} }),
                Column::new("Created", "createdAt", |row: &FlowTypeRow| html! { {&row.created_text} }).width(180),
                Column::new("Actions", "actions", move |row: &FlowTypeRow| {
                    let on_edit = {
                        let dispatch = dispatch.clone();
                        let record = row.record.clone();
                        Callback::from(move |_: MouseEvent| dispatch.emit(ListAction::OpenEdit { record: record.clone() }))
                    };
                    let on_delete = {
                        let dispatch = dispatch.clone();
                        let id = row.record.id;
                        Callback::from(move |_: MouseEvent| dispatch.emit(ListAction::RequestDelete(vec![id])))
                    };
                    html! {
                        <div class="row-actions">
                            <button type="button" class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
                            <button type="button" class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                        </div>
                    }
                })
                .width(180),
            ]
        })
    };

    let on_add = dispatch.reform(|_: ()| ListAction::OpenCreate { now: now_millis() });

    html! {
        <div class="flow-type">
            <DataTable<FlowTypeRow>
                rows={state.rows().to_vec()}
                columns={(*columns).clone()}
                table={state.list.table.clone()}
                total={state.rows().len() as u64}
                loading={state.list.load.is_loading()}
                failed={state.list.load.is_failed()}
                selected={state.list.selected.clone()}
                on_change={dispatch.reform(ListAction::TableChanged)}
                on_reload={dispatch.reform(|_: ()| ListAction::Reload)}
                on_toggle_select={dispatch.reform(ListAction::ToggleSelected)}
                on_delete_selected={dispatch.reform(|_: ()| ListAction::DeleteSelected)}
                on_add={Some(on_add)}
                paged=false
            />
            <CreateTypeModal
                modal={state.list.modal.clone()}
                max_name_len={context.config.max_type_name_len}
                on_edit={dispatch.reform(ListAction::Edit)}
                on_submit={dispatch.reform(|_: ()| ListAction::Submit)}
                on_cancel={dispatch.reform(|_: ()| ListAction::CancelModal)}
            />
            <ConfirmDialog
                pending={state.list.confirm.clone()}
                on_confirm={dispatch.reform(|_: ()| ListAction::ConfirmDelete)}
                on_cancel={dispatch.reform(|_: ()| ListAction::CancelDelete)}
            />
            <NoticeToast
                notice={state.list.notices.current().cloned()}
                on_dismiss={dispatch.reform(ListAction::DismissNotice)}
            />
        </div>
    }
}
