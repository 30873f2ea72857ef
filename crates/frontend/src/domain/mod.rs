pub mod a001_client;
pub mod a002_provider;
pub mod a003_article;
pub mod a004_sale;
pub mod a005_stock_movement;
