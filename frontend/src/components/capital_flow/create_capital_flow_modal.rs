use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use shared::forms::{CapitalFlowField, CapitalFlowForm};
use shared::modal::{EditModal, ModalMode};
use shared::screens::flow_type::FlowTypeRow;
use crate::components::modal::Modal;
use crate::services::date_utils::{datetime_input_value, parse_datetime_input};

#[derive(Properties, PartialEq)]
pub struct CreateCapitalFlowModalProps {
    pub modal: EditModal<CapitalFlowForm>,
    pub categories: Vec<FlowTypeRow>,
    pub on_edit: Callback<CapitalFlowField>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(CreateCapitalFlowModal)]
pub fn create_capital_flow_modal(props: &CreateCapitalFlowModalProps) -> Html {
    let Some(fields) = props.modal.fields() else {
        return html! {};
    };
    let is_submitting = props.modal.is_submitting();
    let title = match props.modal.mode() {
        Some(ModalMode::Edit { .. }) => "Edit flow record",
        _ => "New flow record",
    };

    let on_date_change = props.on_edit.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        CapitalFlowField::Date(parse_datetime_input(&input.value()))
    });

    let on_type_change = props.on_edit.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        CapitalFlowField::TypeNameId(select.value().parse::<i64>().ok())
    });

    let on_price_input = props.on_edit.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        CapitalFlowField::Price(input.value())
    });

    let on_remarks_input = props.on_edit.reform(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        CapitalFlowField::Remarks(input.value())
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
                    <label for="flow-date">{"Date"}</label>
                    <input
                        id="flow-date"
                        type="datetime-local"
                        value={datetime_input_value(fields.date)}
                        onchange={on_date_change}
                        disabled={is_submitting}
                    />
                </div>
                <div class="form-group">
                    <label for="flow-type">{"Flow type"}</label>
                    <select id="flow-type" onchange={on_type_change} disabled={is_submitting}>
                        <option value="" selected={fields.type_name_id.is_none()}>{"Choose a flow type"}</option>
                        {for props.categories.iter().map(|category| html! {
                            <option
                                value={category.record.id.to_string()}
                                selected={fields.type_name_id == Some(category.record.id)}
                            >
                                {&category.option_name}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="flow-price">{"Amount"}</label>
                    <input
                        id="flow-price"
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        value={fields.price.clone()}
                        oninput={on_price_input}
                        disabled={is_submitting}
                    />
                </div>
                <div class="form-group">
                    <label for="flow-remarks">{"Remarks"}</label>
                    <textarea
                        id="flow-remarks"
                        rows="3"
                        value={fields.remarks.clone()}
                        oninput={on_remarks_input}
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
