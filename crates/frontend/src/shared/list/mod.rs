//! Generic tabular list: configuration-driven columns, local filter/sort/paging,
//! per-row actions and confirmed deletion.

pub mod api;
pub mod column;
pub mod config;
pub mod confirm;
pub mod query;
pub mod row;
pub mod state;
pub mod view;

pub use column::{Align, CellRenderer, ColumnDescriptor, ColumnWidth, Formatter};
pub use config::{
    json_mapper, wrapped_mapper, AddAction, ConfigError, ConfirmConfig, ListConfig, RowAction,
    RowMapper, RowPermissions, ToolbarConfig, PAGE_SIZE_OPTIONS,
};
pub use query::{SortDirection, SortSpec, ViewQuery};
pub use row::{CellValue, Row, RowId};
pub use state::ListState;
pub use view::TabularList;
