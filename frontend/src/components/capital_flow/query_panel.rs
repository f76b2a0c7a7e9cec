use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use shared::dates::QuickRange;
use shared::screens::capital_flow::{FlowAction, FlowFilters, FlowTotals};
use shared::screens::flow_type::FlowTypeRow;
use shared::FlowKind;
use crate::components::date_range_picker::DateRangePicker;
use crate::services::date_utils::today;

#[derive(Properties, PartialEq)]
pub struct QueryPanelProps {
    pub filters: FlowFilters,
    pub categories: Vec<FlowTypeRow>,
    pub totals: FlowTotals,
    pub max_keyword_len: usize,
    pub dispatch: Callback<FlowAction>,
}

#[function_component(QueryPanel)]
pub fn query_panel(props: &QueryPanelProps) -> Html {
    let dispatch = props.dispatch.clone();

    let on_category_change = dispatch.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        FlowAction::SetCategory(select.value().parse::<i64>().ok())
    });

    let on_kind_change = dispatch.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let kind = select.value().parse::<u8>().ok().and_then(|code| FlowKind::try_from(code).ok());
        FlowAction::SetKind(kind)
    });

    let on_keyword_input = dispatch.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        FlowAction::SetKeyword(input.value())
    });

    let on_keyword_keydown = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                dispatch.emit(FlowAction::Search);
            }
        })
    };

    let on_search = dispatch.reform(|_: MouseEvent| FlowAction::Search);
    let on_reset = dispatch.reform(|_: MouseEvent| FlowAction::Reset { today: today() });
    let on_date_change = dispatch.reform(FlowAction::SetDate);

    let selected_category = props.filters.type_name_id;

    html! {
        <div class="query-panel">
            <div class="query-row">
                <label>{"Flow type:"}</label>
                <select onchange={on_category_change}>
                    <option value="" selected={selected_category.is_none()}>{"All"}</option>
                    {for props.categories.iter().map(|category| html! {
                        <option
                            value={category.record.id.to_string()}
                            selected={selected_category == Some(category.record.id)}
                        >
                            {&category.option_name}
                        </option>
                    })}
                </select>
                {if selected_category.is_none() {
                    html! {
                        <>
                            <label>{"Kind:"}</label>
                            <select onchange={on_kind_change}>
                                <option value="" selected={props.filters.kind.is_none()}>{"All"}</option>
                                {for FlowKind::ALL.iter().map(|kind| html! {
                                    <option value={kind.code().to_string()} selected={props.filters.kind == Some(*kind)}>
                                        {kind.label()}
                                    </option>
                                })}
                            </select>
                        </>
                    }
                } else {
                    html! {}
                }}
                <input
                    type="search"
                    class="keyword-input"
                    placeholder="Search remarks"
                    maxlength={props.max_keyword_len.to_string()}
                    value={props.filters.keyword.clone()}
                    oninput={on_keyword_input}
                    onkeydown={on_keyword_keydown}
                />
                <button type="button" class="btn btn-primary" onclick={on_search}>{"Search"}</button>
                <button type="button" class="btn btn-secondary" onclick={on_reset}>{"Reset"}</button>
            </div>
            <div class="query-row">
                <label>{"Date:"}</label>
                <DateRangePicker value={props.filters.date} on_change={on_date_change} />
                {for QuickRange::ALL.iter().map(|range| {
                    let range = *range;
                    let on_click = dispatch.reform(move |_: MouseEvent| FlowAction::ApplyQuickRange { range, today: today() });
                    html! {
                        <button type="button" class="btn btn-link" onclick={on_click}>{range.label()}</button>
                    }
                })}
            </div>
            <div class="totals">
                <div class="total-item">
                    <em>{"Income: "}</em>
                    <span>{format!("{:.2}", props.totals.income)}</span>
                </div>
                <div class="total-item">
                    <em>{"Expense: "}</em>
                    <span>{format!("{:.2}", props.totals.consumption)}</span>
                </div>
                <div class="total-item">
                    <em>{"Available: "}</em>
                    <span>{format!("{:.2}", props.totals.available)}</span>
                </div>
            </div>
        </div>
    }
}
