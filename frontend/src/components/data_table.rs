use std::collections::BTreeSet;
use std::rc::Rc;
use yew::prelude::*;
use shared::screens::capital_flow::FlowRow;
use shared::screens::flow_type::FlowTypeRow;
use shared::screens::reminder::ReminderRow;
use shared::table::{TableChange, TableState};

/// A row the table can select by id
pub trait TableRecord {
    fn row_id(&self) -> i64;
}

impl TableRecord for FlowRow {
    fn row_id(&self) -> i64 {
        self.record.id
    }
}

impl TableRecord for FlowTypeRow {
    fn row_id(&self) -> i64 {
        self.record.id
    }
}

impl TableRecord for ReminderRow {
    fn row_id(&self) -> i64 {
        self.record.id
    }
}

/// A column-level filter option, shown as a toggle in the header
#[derive(Clone, PartialEq)]
pub struct ColumnFilter {
    pub value: &'static str,
    pub text: &'static str,
}

pub struct Column<R> {
    pub title: &'static str,
    pub key: &'static str,
    pub width: Option<u32>,
    pub sortable: bool,
    pub filters: Vec<ColumnFilter>,
    pub render: Rc<dyn Fn(&R) -> Html>,
}

impl<R> Column<R> {
    pub fn new(title: &'static str, key: &'static str, render: impl Fn(&R) -> Html + 'static) -> Self {
        Self { title, key, width: None, sortable: false, filters: Vec::new(), render: Rc::new(render) }
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filter(mut self, value: &'static str, text: &'static str) -> Self {
        self.filters.push(ColumnFilter { value, text });
        self
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            key: self.key,
            width: self.width,
            sortable: self.sortable,
            filters: self.filters.clone(),
            render: self.render.clone(),
        }
    }
}

impl<R> PartialEq for Column<R> {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.key == other.key
            && self.width == other.width
            && self.sortable == other.sortable
            && self.filters == other.filters
            && Rc::ptr_eq(&self.render, &other.render)
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<R: TableRecord + PartialEq + 'static> {
    pub rows: Vec<R>,
    pub columns: Vec<Column<R>>,
    pub table: TableState,
    pub total: u64,
    pub loading: bool,
    pub failed: bool,
    pub selected: BTreeSet<i64>,
    pub on_change: Callback<TableChange>,
    pub on_reload: Callback<()>,
    pub on_toggle_select: Callback<i64>,
    pub on_delete_selected: Callback<()>,
    #[prop_or_default]
    pub on_add: Option<Callback<()>>,
    /// Hide the pager for lists the backend does not page
    #[prop_or(true)]
    pub paged: bool,
}

/// Controlled table: every header, filter or pager interaction is reported
/// through `on_change` and comes back through `table`
#[function_component(DataTable)]
pub fn data_table<R>(props: &DataTableProps<R>) -> Html
where
    R: TableRecord + PartialEq + 'static,
{
    let table = &props.table;

    let toolbar = {
        let on_reload = props.on_reload.clone();
        let on_delete_selected = props.on_delete_selected.clone();
        let selected_count = props.selected.len();
        html! {
            <div class="table-toolbar">
                {if let Some(on_add) = props.on_add.clone() {
                    html! {
                        <button type="button" class="btn btn-primary" onclick={Callback::from(move |_: MouseEvent| on_add.emit(()))}>
                            {"Add"}
                        </button>
                    }
                } else {
                    html! {}
                }}
                <button
                    type="button"
                    class="btn btn-danger"
                    disabled={selected_count == 0}
                    onclick={Callback::from(move |_: MouseEvent| on_delete_selected.emit(()))}
                >
                    {format!("Delete selected ({})", selected_count)}
                </button>
                <button type="button" class="btn btn-secondary" onclick={Callback::from(move |_: MouseEvent| on_reload.emit(()))}>
                    {"Reload"}
                </button>
            </div>
        }
    };

    let header_cells = props.columns.iter().map(|column| {
        let style = column.width.map(|width| format!("width: {}px", width));
        let sort_arrow = table
            .sorter
            .as_ref()
            .filter(|sorter| sorter.field == column.key)
            .map(|sorter| sorter.order.arrow())
            .unwrap_or("");
        let on_sort = column.sortable.then(|| {
            let on_change = props.on_change.clone();
            let change = table.with_sort_toggled(column.key);
            Callback::from(move |_: MouseEvent| on_change.emit(change.clone()))
        });
        let filters = column.filters.iter().map(|filter| {
            let active = table.filters.is_active(column.key, filter.value);
            let on_change = props.on_change.clone();
            let change = table.with_filter_toggled(column.key, filter.value);
            html! {
                <button
                    type="button"
                    class={classes!("column-filter", active.then_some("active"))}
                    onclick={Callback::from(move |e: MouseEvent| {
                        e.stop_propagation();
                        on_change.emit(change.clone());
                    })}
                >
                    {filter.text}
                </button>
            }
        });
        html! {
            <th {style} class={classes!(column.sortable.then_some("sortable"))}>
                // Only the title sorts; filter toggles sit beside it
                <span class="column-title" onclick={on_sort}>
                    {column.title}
                    <span class="sort-arrow">{sort_arrow}</span>
                </span>
                {for filters}
            </th>
        }
    });

    let body = if props.failed && props.rows.is_empty() {
        html! { <tr><td class="table-message" colspan="100">{"Failed to load data"}</td></tr> }
    } else if props.loading && props.rows.is_empty() {
        html! { <tr><td class="table-message" colspan="100">{"Loading..."}</td></tr> }
    } else if props.rows.is_empty() {
        html! { <tr><td class="table-message" colspan="100">{"No data"}</td></tr> }
    } else {
        html! {
            {for props.rows.iter().map(|row| {
                let id = row.row_id();
                let on_toggle = {
                    let on_toggle_select = props.on_toggle_select.clone();
                    Callback::from(move |_: Event| on_toggle_select.emit(id))
                };
                html! {
                    <tr key={id.to_string()}>
                        <td class="select-cell">
                            <input type="checkbox" checked={props.selected.contains(&id)} onchange={on_toggle} />
                        </td>
                        {for props.columns.iter().map(|column| html! { <td>{(column.render)(row)}</td> })}
                    </tr>
                }
            })}
        }
    };

    let pager = if props.paged {
        let page_no = table.pagination.page_no;
        let page_count = table.pagination.page_count(props.total);
        let on_prev = {
            let on_change = props.on_change.clone();
            let change = table.with_page(page_no.saturating_sub(1));
            Callback::from(move |_: MouseEvent| on_change.emit(change.clone()))
        };
        let on_next = {
            let on_change = props.on_change.clone();
            let change = table.with_page(page_no + 1);
            Callback::from(move |_: MouseEvent| on_change.emit(change.clone()))
        };
        html! {
            <div class="table-pager">
                <span class="table-total">{format!("{} records", props.total)}</span>
                <button type="button" class="btn btn-secondary" disabled={page_no <= 1} onclick={on_prev}>{"Previous"}</button>
                <span class="table-page">{format!("Page {} of {}", page_no, page_count)}</span>
                <button type="button" class="btn btn-secondary" disabled={page_no >= page_count} onclick={on_next}>{"Next"}</button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <section class="data-table">
            {toolbar}
            <div class={classes!("table-container", props.loading.then_some("loading"))}>
                {if props.failed && !props.rows.is_empty() {
                    html! { <div class="table-error">{"Failed to load data, showing the previous results"}</div> }
                } else {
                    html! {}
                }}
                <table class="records-table">
                    <thead>
                        <tr>
                            <th class="select-cell"></th>
                            {for header_cells}
                        </tr>
                    </thead>
                    <tbody>
                        {body}
                    </tbody>
                </table>
            </div>
            {pager}
        </section>
    }
}
