use serde::{Deserialize, Serialize};

/// Catalogue article
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub code: String,
    pub description: String,
    pub category: Option<String>,
    pub provider_name: Option<String>,
    pub cost_price: f64,
    pub sale_price: f64,
    pub stock: f64,
    #[serde(default)]
    pub min_stock: f64,
    pub is_active: bool,
}

impl Article {
    pub fn is_below_min_stock(&self) -> bool {
        self.stock < self.min_stock
    }
}

/// `GET /api/articulos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleListResponse {
    #[serde(rename = "articulos")]
    pub items: Vec<Article>,
}
