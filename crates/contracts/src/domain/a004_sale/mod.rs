use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Pendiente,
    Pagada,
    Anulada,
}

impl SaleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SaleStatus::Pendiente => "Pendiente",
            SaleStatus::Pagada => "Pagada",
            SaleStatus::Anulada => "Anulada",
        }
    }
}

/// Sale header; lines only come with the detail record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: i64,
    pub number: String,
    pub date: String,
    pub client_name: String,
    pub payment_method: Option<String>,
    pub status: SaleStatus,
    pub total: f64,
    #[serde(default)]
    pub lines: Vec<SaleLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    pub article_code: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub subtotal: f64,
}

/// `GET /api/ventas`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleListResponse {
    #[serde(rename = "ventas")]
    pub items: Vec<Sale>,
}
