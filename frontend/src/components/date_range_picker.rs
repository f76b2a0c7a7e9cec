use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::dates::{date_input_value, parse_date_input, DateSelection};

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    pub value: DateSelection,
    /// Emitted on every bound change, including clearing one
    pub on_change: Callback<DateSelection>,
}

#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let on_start_change = {
        let on_change = props.on_change.clone();
        let value = props.value;
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(DateSelection::new(parse_date_input(&input.value()), value.end));
        })
    };

    let on_end_change = {
        let on_change = props.on_change.clone();
        let value = props.value;
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(DateSelection::new(value.start, parse_date_input(&input.value())));
        })
    };

    let on_clear = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(DateSelection::cleared()))
    };

    html! {
        <span class="date-range-picker">
            <input
                type="date"
                class="date-input"
                value={date_input_value(props.value.start)}
                onchange={on_start_change}
            />
            <span class="date-range-separator">{"~"}</span>
            <input
                type="date"
                class="date-input"
                value={date_input_value(props.value.end)}
                onchange={on_end_change}
            />
            <button type="button" class="btn btn-link" onclick={on_clear}>{"Clear"}</button>
        </span>
    }
}
