//! Generic operations over list rows: search, sort and pagination

use std::collections::HashSet;

use super::column::ColumnDescriptor;
use super::row::Row;

/// Filters shorter than this are ignored
pub const MIN_FILTER_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Descending,
        }
    }

    /// Header click: same field flips direction, new field starts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            *self = SortSpec::ascending(field);
        }
    }

    /// Sort indicator shown next to a header
    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field != field {
            return " ⇅";
        }
        match self.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    }
}

/// User-controlled view over the loaded rows
#[derive(Debug, Clone, PartialEq)]
pub struct ViewQuery {
    pub filter: String,
    pub sort: SortSpec,
    pub page: usize,
    pub page_size: usize,
    pub hidden_columns: HashSet<&'static str>,
}

impl ViewQuery {
    pub fn new(sort: SortSpec, page_size: usize) -> Self {
        Self {
            filter: String::new(),
            sort,
            page: 0,
            page_size,
            hidden_columns: HashSet::new(),
        }
    }

    pub fn is_filter_active(&self) -> bool {
        self.filter.trim().chars().count() >= MIN_FILTER_LEN
    }

    pub fn is_visible(&self, column: &ColumnDescriptor) -> bool {
        !column.hideable || !self.hidden_columns.contains(column.key)
    }

    /// Column picker toggle; non-hideable columns are left alone
    pub fn toggle_column(&mut self, column: &ColumnDescriptor) {
        if !column.hideable {
            return;
        }
        if !self.hidden_columns.remove(column.key) {
            self.hidden_columns.insert(column.key);
        }
    }

    pub fn visible_columns<'a>(&self, columns: &'a [ColumnDescriptor]) -> Vec<&'a ColumnDescriptor> {
        columns.iter().filter(|c| self.is_visible(c)).collect()
    }
}

/// One page of the filtered and sorted rows
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice {
    pub rows: Vec<Row>,
    pub page: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

/// Case-insensitive substring match over the formatted visible columns
pub fn filter_rows<'a>(rows: &'a [Row], columns: &[&ColumnDescriptor], filter: &str) -> Vec<&'a Row> {
    let needle = filter.trim().to_lowercase();
    if needle.chars().count() < MIN_FILTER_LEN {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|row| {
            columns
                .iter()
                .any(|c| c.display(row).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable sort; unknown fields compare equal and keep backend order
pub fn sort_rows(rows: &mut [&Row], sort: &SortSpec) {
    if sort.field.is_empty() {
        return;
    }
    rows.sort_by(|a, b| {
        let cmp = a.get(&sort.field).compare(b.get(&sort.field));
        match sort.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if total_count == 0 || page_size == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    }
}

/// Filter + sort without paging (export uses this)
pub fn arrange<'a>(rows: &'a [Row], columns: &[ColumnDescriptor], query: &ViewQuery) -> Vec<&'a Row> {
    let visible = query.visible_columns(columns);
    let mut matched = filter_rows(rows, &visible, &query.filter);
    sort_rows(&mut matched, &query.sort);
    matched
}

/// Filter, sort and cut out the requested page; the page index is clamped
pub fn page_slice(rows: &[Row], columns: &[ColumnDescriptor], query: &ViewQuery) -> PageSlice {
    let arranged = arrange(rows, columns, query);
    let total_count = arranged.len();
    let total_pages = total_pages(total_count, query.page_size);
    let page = query.page.min(total_pages - 1);
    let start = page * query.page_size;
    let end = (start + query.page_size).min(total_count);
    PageSlice {
        rows: arranged
            .get(start..end)
            .unwrap_or(&[])
            .iter()
            .map(|r| (*r).clone())
            .collect(),
        page,
        total_count,
        total_pages,
    }
}
