use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use shared::forms::{FlowTypeField, FlowTypeForm};
use shared::modal::{EditModal, ModalMode};
use shared::FlowKind;
use crate::components::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct CreateTypeModalProps {
    pub modal: EditModal<FlowTypeForm>,
    pub max_name_len: usize,
    pub on_edit: Callback<FlowTypeField>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(CreateTypeModal)]
pub fn create_type_modal(props: &CreateTypeModalProps) -> Html {
    let Some(fields) = props.modal.fields() else {
        return html! {};
    };
    let is_submitting = props.modal.is_submitting();
    let title = match props.modal.mode() {
        Some(ModalMode::Edit { .. }) => "Edit flow type",
        _ => "New flow type",
    };

    let on_name_input = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(FlowTypeField::Name(input.value()));
        })
    };

    let on_kind_change = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let kind = select.value().parse::<u8>().ok().and_then(|code| FlowKind::try_from(code).ok());
            if let Some(kind) = kind {
                on_edit.emit(FlowTypeField::Kind(kind));
            }
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <Modal is_open=true {title} on_close={props.on_cancel.clone()} locked={is_submitting}>
            <form class="modal-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="flow-type-kind">{"Kind"}</label>
                    <select id="flow-type-kind" onchange={on_kind_change} disabled={is_submitting}>
                        {for FlowKind::ALL.iter().map(|kind| html! {
                            <option value={kind.code().to_string()} selected={*kind == fields.kind}>
                                {kind.label()}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="flow-type-name">{"Name"}</label>
                    <input
                        id="flow-type-name"
                        type="text"
                        placeholder="Enter a name"
                        maxlength={props.max_name_len.to_string()}
                        value={fields.name.clone()}
                        oninput={on_name_input}
                        disabled={is_submitting}
                        autofocus=true
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
