//! Detail dialog: one record fetched by id, shown across named tabs

pub mod api;
pub mod state;
pub mod tabs;
pub mod view;

pub use state::{DetailState, DialogPhase};
pub use tabs::{DetailConfig, DetailTab, FieldFormat, FieldSpec, TabContent};
pub use view::{DetailDialog, DetailPage};
