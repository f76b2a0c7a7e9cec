use yew::prelude::*;
use shared::screens::reminder::ContactNotice;
use crate::components::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct ContactNoticeDialogProps {
    pub notice: Option<ContactNotice>,
    pub on_close: Callback<()>,
}

/// Warns that reminders cannot be mailed without a public email address
#[function_component(ContactNoticeDialog)]
pub fn contact_notice_dialog(props: &ContactNoticeDialogProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal is_open=true title="No email address found" on_close={props.on_close.clone()}>
            <p class="contact-notice">
                {"Please make your GitHub email address public, otherwise reminders cannot be delivered. "}
                <a href={notice.settings_url.clone()} target="_blank" rel="noopener noreferrer">
                    {"Open settings"}
                </a>
            </p>
            <div class="modal-buttons">
                <button type="button" class="btn btn-primary" onclick={on_close}>{"OK"}</button>
            </div>
        </Modal>
    }
}
