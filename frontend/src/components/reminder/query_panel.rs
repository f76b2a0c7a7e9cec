use yew::prelude::*;
use web_sys::HtmlSelectElement;
use shared::screens::reminder::{ReminderAction, ReminderFilters};
use shared::ReminderStatus;
use crate::components::date_range_picker::DateRangePicker;
use crate::services::date_utils::today;

#[derive(Properties, PartialEq)]
pub struct ReminderQueryPanelProps {
    pub filters: ReminderFilters,
    pub dispatch: Callback<ReminderAction>,
}

#[function_component(ReminderQueryPanel)]
pub fn reminder_query_panel(props: &ReminderQueryPanelProps) -> Html {
    let on_status_change = props.dispatch.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let status = select.value().parse::<u8>().ok().and_then(|code| ReminderStatus::try_from(code).ok());
        ReminderAction::SetStatus(status)
    });
    let on_date_change = props.dispatch.reform(ReminderAction::SetDate);
    let on_search = props.dispatch.reform(|_: MouseEvent| ReminderAction::Search);
    let on_reset = props.dispatch.reform(|_: MouseEvent| ReminderAction::Reset { today: today() });

    html! {
        <div class="query-panel">
            <div class="query-row">
                <label>{"Status:"}</label>
                <select onchange={on_status_change}>
                    <option value="" selected={props.filters.status.is_none()}>{"All"}</option>
                    {for ReminderStatus::ALL.iter().map(|status| html! {
                        <option value={status.code().to_string()} selected={props.filters.status == Some(*status)}>
                            {status.label()}
                        </option>
                    })}
                </select>
                <label>{"Date:"}</label>
                <DateRangePicker value={props.filters.date} on_change={on_date_change} />
                <button type="button" class="btn btn-primary" onclick={on_search}>{"Search"}</button>
                <button type="button" class="btn btn-secondary" onclick={on_reset}>{"Reset"}</button>
            </div>
        </div>
    }
}
