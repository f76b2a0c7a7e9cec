use yew::prelude::*;
use super::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    /// Ids awaiting confirmation; the dialog is closed when `None`
    pub pending: Option<Vec<i64>>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let Some(ids) = &props.pending else {
        return html! {};
    };

    let message = if ids.len() == 1 {
        "Delete this record? This cannot be undone.".to_string()
    } else {
        format!("Delete {} records? This cannot be undone.", ids.len())
    };

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <Modal is_open=true title="Confirm deletion" on_close={props.on_cancel.clone()}>
            <p class="confirm-message">{message}</p>
            <div class="modal-buttons">
                <button type="button" class="btn btn-danger" onclick={on_confirm}>{"Delete"}</button>
                <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
            </div>
        </Modal>
    }
}
