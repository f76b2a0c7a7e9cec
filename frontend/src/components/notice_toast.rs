use gloo::timers::callback::Timeout;
use yew::prelude::*;
use shared::outbox::Notice;

const DISMISS_AFTER_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct NoticeToastProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<u64>,
}

/// Shows the latest notice and dismisses it after a few seconds
#[function_component(NoticeToast)]
pub fn notice_toast(props: &NoticeToastProps) -> Html {
    use_effect_with(props.notice.as_ref().map(|notice| notice.id), {
        let on_dismiss = props.on_dismiss.clone();
        move |id: &Option<u64>| {
            let timer = id.map(|id| Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(id)));
            move || drop(timer)
        }
    });

    let Some(notice) = &props.notice else {
        return html! {};
    };

    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        let id = notice.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class="notice notice-warning" onclick={on_click}>
            {&notice.text}
        </div>
    }
}
