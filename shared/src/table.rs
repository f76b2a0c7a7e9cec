use std::collections::{BTreeMap, BTreeSet};

/// Sort direction reported by a sortable column header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascend,
    Descend,
}

impl SortOrder {
    /// Suffix the backend expects in the `sort` parameter
    pub fn param(&self) -> &'static str {
        match self {
            SortOrder::Ascend => "asc",
            SortOrder::Descend => "desc",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Ascend => "▲",
            SortOrder::Descend => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorter {
    pub field: String,
    pub order: SortOrder,
}

impl Sorter {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self { field: field.into(), order }
    }

    /// `"<field>-asc"` or `"<field>-desc"`
    pub fn to_param(&self) -> String {
        format!("{}-{}", self.field, self.order.param())
    }

    /// Header click cycle: unsorted, ascending, descending, unsorted again.
    /// Clicking another column starts that column at ascending.
    pub fn cycle(current: Option<&Sorter>, field: &str) -> Option<Sorter> {
        match current {
            Some(sorter) if sorter.field == field => match sorter.order {
                SortOrder::Ascend => Some(Sorter::new(field, SortOrder::Descend)),
                SortOrder::Descend => None,
            },
            _ => Some(Sorter::new(field, SortOrder::Ascend)),
        }
    }
}

/// Active column-level filter values, keyed by column key
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnFilters(BTreeMap<String, BTreeSet<String>>);

impl ColumnFilters {
    pub fn is_active(&self, column: &str, value: &str) -> bool {
        self.0.get(column).is_some_and(|values| values.contains(value))
    }

    /// Flip one filter value on or off
    pub fn toggle(&mut self, column: &str, value: &str) {
        let values = self.0.entry(column.to_string()).or_default();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        if values.is_empty() {
            self.0.remove(column);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 1-based page cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_no: u32,
    pub page_size: u32,
}

impl Pagination {
    pub fn first(page_size: u32) -> Self {
        Self { page_no: 1, page_size: page_size.max(1) }
    }

    pub fn page_count(&self, total: u64) -> u32 {
        let size = u64::from(self.page_size.max(1));
        (total.div_ceil(size)).max(1) as u32
    }
}

/// What the table reports back after a header, filter or pager interaction
#[derive(Debug, Clone, PartialEq)]
pub struct TableChange {
    pub pagination: Pagination,
    pub sorter: Option<Sorter>,
    pub filters: ColumnFilters,
}

/// The table-owned part of a screen's query
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub pagination: Pagination,
    pub sorter: Option<Sorter>,
    pub filters: ColumnFilters,
}

impl TableState {
    pub fn new(page_size: u32) -> Self {
        Self { pagination: Pagination::first(page_size), sorter: None, filters: ColumnFilters::default() }
    }

    pub fn apply(&mut self, change: TableChange) {
        self.pagination = change.pagination;
        self.sorter = change.sorter;
        self.filters = change.filters;
    }

    /// Filters on the screen changed; earlier pages no longer apply
    pub fn rewind(&mut self) {
        self.pagination.page_no = 1;
    }

    /// Build the change that moves to `page_no`, keeping everything else
    pub fn with_page(&self, page_no: u32) -> TableChange {
        TableChange {
            pagination: Pagination { page_no: page_no.max(1), ..self.pagination },
            sorter: self.sorter.clone(),
            filters: self.filters.clone(),
        }
    }

    pub fn with_sort_toggled(&self, field: &str) -> TableChange {
        TableChange {
            pagination: self.pagination,
            sorter: Sorter::cycle(self.sorter.as_ref(), field),
            filters: self.filters.clone(),
        }
    }

    pub fn with_filter_toggled(&self, column: &str, value: &str) -> TableChange {
        let mut filters = self.filters.clone();
        filters.toggle(column, value);
        TableChange { pagination: self.pagination, sorter: self.sorter.clone(), filters }
    }
}

/// Lifecycle of a list load.
///
/// Every load carries the generation it was issued under, and only the
/// completion for the current generation is accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading { generation: u64, stale: Option<T> },
    Loaded { generation: u64, data: T },
    Failed { generation: u64, stale: Option<T> },
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    /// Enter `Loading`, keeping whatever was on screen as stale data
    pub fn begin(&mut self, generation: u64) {
        let stale = std::mem::take(self).into_data();
        *self = LoadState::Loading { generation, stale };
    }

    /// Return to `Idle`; any in-flight completion becomes stale
    pub fn reset(&mut self) {
        *self = LoadState::Idle;
    }

    /// Accept a completion. Returns `false` (and changes nothing) when the
    /// completion belongs to a superseded generation.
    pub fn complete(&mut self, generation: u64, data: T) -> bool {
        if self.pending_generation() != Some(generation) {
            return false;
        }
        *self = LoadState::Loaded { generation, data };
        true
    }

    pub fn fail(&mut self, generation: u64) -> bool {
        if self.pending_generation() != Some(generation) {
            return false;
        }
        let stale = std::mem::take(self).into_data();
        *self = LoadState::Failed { generation, stale };
        true
    }

    /// Generation of the load currently in flight
    pub fn pending_generation(&self) -> Option<u64> {
        match self {
            LoadState::Loading { generation, .. } => Some(*generation),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed { .. })
    }

    /// Data to render: the loaded page, or the previous page while reloading
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Idle => None,
            LoadState::Loading { stale, .. } | LoadState::Failed { stale, .. } => stale.as_ref(),
            LoadState::Loaded { data, .. } => Some(data),
        }
    }

    fn into_data(self) -> Option<T> {
        match self {
            LoadState::Idle => None,
            LoadState::Loading { stale, .. } | LoadState::Failed { stale, .. } => stale,
            LoadState::Loaded { data, .. } => Some(data),
        }
    }
}
