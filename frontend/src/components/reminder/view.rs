use yew::prelude::*;
use shared::screens::list::ListAction;
use shared::screens::reminder::{ReminderAction, ReminderRow};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::data_table::{Column, DataTable};
use crate::components::notice_toast::NoticeToast;
use crate::context::AppContext;
use crate::hooks::use_reminders::{use_reminders, ReminderListAction};
use crate::services::date_utils::now_millis;
use super::contact_notice::ContactNoticeDialog;
use super::create_reminder_modal::CreateReminderModal;
use super::query_panel::ReminderQueryPanel;

fn reminder_columns(list: Callback<ReminderListAction>) -> Vec<Column<ReminderRow>> {
    vec![
        Column::new("Status", "type", |row: &ReminderRow| html! {
            <span class="tag" style={format!("background-color: {}", row.color)}>{row.status_label}</span>
        })
        .width(100),
        Column::new("Remind at", "date", |row: &ReminderRow| html! { {&row.date_text} }).width(220),
        Column::new("Content", "content", |row: &ReminderRow| html! {
            <span class="word-break-all white-space-pre">{&row.record.content}</span>
        }),
        Column::new("Actions", "actions", move |row: &ReminderRow| {
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

#[function_component(ReminderView)]
pub fn reminder_view() -> Html {
    let context = use_context::<AppContext>().unwrap_or_default();
    let result = use_reminders(&context);
    let state = &result.state;
    let dispatch = result.actions.dispatch.clone();
    let list = result.actions.list.clone();

    let columns = {
        let list = list.clone();
        use_memo((), move |_| reminder_columns(list))
    };

    let view = state.list.load.data();
    let rows = view.map(|view| view.rows.clone()).unwrap_or_default();
    let total = view.map(|view| view.count).unwrap_or_default();

    html! {
        <div class="reminder">
            <ReminderQueryPanel filters={state.filters.clone()} dispatch={dispatch.clone()} />
            <DataTable<ReminderRow>
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
            <CreateReminderModal
                modal={state.list.modal.clone()}
                on_edit={list.reform(ListAction::Edit)}
                on_submit={list.reform(|_: ()| ListAction::Submit)}
                on_cancel={list.reform(|_: ()| ListAction::CancelModal)}
            />
            <ConfirmDialog
                pending={state.list.confirm.clone()}
                on_confirm={list.reform(|_: ()| ListAction::ConfirmDelete)}
                on_cancel={list.reform(|_: ()| ListAction::CancelDelete)}
            />
            <ContactNoticeDialog
                notice={state.contact_notice.clone()}
                on_close={dispatch.reform(|_: ()| ReminderAction::DismissContactNotice)}
            />
            <NoticeToast
                notice={state.list.notices.current().cloned()}
                on_dismiss={list.reform(ListAction::DismissNotice)}
            />
        </div>
    }
}
