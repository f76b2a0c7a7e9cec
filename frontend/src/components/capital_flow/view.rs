use yew::prelude::*;
use shared::screens::capital_flow::{FlowRow, HIDE_AMOUNT, PRICE_COLUMN};
use shared::screens::list::ListAction;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::data_table::{Column, DataTable};
use crate::components::notice_toast::NoticeToast;
use crate::context::AppContext;
use crate::hooks::use_capital_flow::{use_capital_flow, FlowListAction};
use crate::services::date_utils::now_millis;
use super::create_capital_flow_modal::CreateCapitalFlowModal;
use super::query_panel::QueryPanel;

fn flow_columns(hidden: bool, list: Callback<FlowListAction>) -> Vec<Column<FlowRow>> {
    vec![
        Column::new("Date", "date", |row: &FlowRow| html! { {&row.date_text} }).width(180).sortable(),
        Column::new("Flow type", "name", |row: &FlowRow| html! { {&row.record.name} }).width(120),
        Column::new("Amount", PRICE_COLUMN, move |row: &FlowRow| html! {
            <span style={format!("color: {}", row.color)}>{row.amount_text(hidden)}</span>
        })
        .width(140)
        .sortable()
        .filter(HIDE_AMOUNT, "Hide amount"),
        Column::new("Remarks", "remarks", |row: &FlowRow| html! {
            <p class="white-space-pre-wrap">{&row.record.remarks}</p>
        }),
        Column::new("Actions", "actions", move |row: &FlowRow| {
            let on_edit = {
                let list = list.clone();
                let record = row.record.clone();
                Callback::from(move |_: MouseEvent| list.emit(ListAction::OpenEdit { record: record.clone() }))
            };
            let on_delete = {
                let list = list.clone();
                let id = row.record.id;
                Callback::from(move |_: MouseEvent| list.emit(ListAction::RequestDelete(vec![id])))
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
}

/// Income and expense records tab
#[function_component(CapitalFlowView)]
pub fn capital_flow_view() -> Html {
    let context = use_context::<AppContext>().unwrap_or_default();
    let result = use_capital_flow(&context);
    let state = &result.state;
    let list = result.actions.list.clone();

    let hidden = state.is_amount_hidden();
    let columns = {
        let list = list.clone();
        use_memo(hidden, move |hidden| flow_columns(*hidden, list))
    };

    let view = state.list.load.data();
    let rows = view.map(|view| view.rows.clone()).unwrap_or_default();
    let total = view.map(|view| view.count).unwrap_or_default();

    html! {
        <div class="capital-flow">
            <QueryPanel
                filters={state.filters.clone()}
                categories={state.categories.clone()}
                totals={state.totals()}
                max_keyword_len={context.config.max_keyword_len}
                dispatch={result.actions.dispatch.clone()}
            />
            <DataTable<FlowRow>
                {rows}
                columns={(*columns).clone()}
                table={state.list.table.clone()}
                {total}
                loading={state.list.load.is_loading()}
                failed={state.list.load.is_failed()}
                selected={state.list.selected.clone()}
                on_change={list.reform(ListAction::TableChanged)}
                on_reload={list.reform(|_: ()| ListAction::Reload)}
                on_toggle_select={list.reform(ListAction::ToggleSelected)}
                on_delete_selected={list.reform(|_: ()| ListAction::DeleteSelected)}
                on_add={Some(list.reform(|_: ()| ListAction::OpenCreate { now: now_millis() }))}
            />
            <CreateCapitalFlowModal
                modal={state.list.modal.clone()}
                categories={state.categories.clone()}
                on_edit={list.reform(ListAction::Edit)}
                on_submit={list.reform(|_: ()| ListAction::Submit)}
                on_cancel={list.reform(|_: ()| ListAction::CancelModal)}
            />
            <ConfirmDialog
                pending={state.list.confirm.clone()}
                on_confirm={list.reform(|_: ()| ListAction::ConfirmDelete)}
                on_cancel={list.reform(|_: ()| ListAction::CancelDelete)}
            />
            <NoticeToast
                notice={state.list.notices.current().cloned()}
                on_dismiss={list.reform(ListAction::DismissNotice)}
            />
        </div>
    }
}
