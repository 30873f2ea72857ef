pub mod api;
pub mod api_utils;
pub mod components;
pub mod detail;
pub mod entity_page;
pub mod export;
pub mod format;
pub mod icons;
pub mod list;
pub mod modal_frame;
pub mod notification;
pub mod page_frame;
