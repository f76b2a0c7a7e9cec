use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// Backdrop clicks are ignored while this is set
    #[prop_or_default]
    pub locked: bool,
    #[prop_or_default]
    pub children: Html,
}

/// Backdrop and frame shared by every dialog
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let locked = props.locked;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !locked {
                on_close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{props.title.clone()}</h3>
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
