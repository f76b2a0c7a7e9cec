use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use shared::forms::{ReminderField, ReminderForm};
use shared::modal::{EditModal, ModalMode};
use crate::components::modal::Modal;
use crate::services::date_utils::{datetime_input_value, parse_datetime_input};

#[derive(Properties, PartialEq)]
pub struct CreateReminderModalProps {
    pub modal: EditModal<ReminderForm>,
    pub on_edit: Callback<ReminderField>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(CreateReminderModal)]
pub fn create_reminder_modal(props: &CreateReminderModalProps) -> Html {
    let Some(fields) = props.modal.fields() else {
        return html! {};
    };
    let is_submitting = props.modal.is_submitting();
    let title = match props.modal.mode() {
        Some(ModalMode::Edit { .. }) => "Edit reminder",
        _ => "New reminder",
    };

    let on_date_change = props.on_edit.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        ReminderField::Date(parse_datetime_input(&input.value()))
    });

    let on_content_input = props.on_edit.reform(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        ReminderField::Content(input.value())
    });

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <Modal is_open=true {title} on_close={props.on_cancel.clone()} locked={is_submitting}>
            <form class="modal-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="reminder-date">{"Remind at"}</label>
                    <input
                        id="reminder-date"
                        type="datetime-local"
                        value={datetime_input_value(fields.date)}
                        onchange={on_date_change}
                        disabled={is_submitting}
                    />
                </div>
                <div class="form-group">
                    <label for="reminder-content">{"Content"}</label>
                    <textarea
                        id="reminder-content"
                        rows="4"
                        placeholder="What should we remind you of?"
                        value={fields.content.clone()}
                        oninput={on_content_input}
                        disabled={is_submitting}
                    />
                </div>
                <div class="modal-buttons">
                    <button type="submit" class="btn btn-primary" disabled={is_submitting}>
                        {if is_submitting { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={is_submitting}>
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
