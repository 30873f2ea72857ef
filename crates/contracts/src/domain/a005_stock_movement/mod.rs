use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Entrada,
    Salida,
    Ajuste,
}

impl MovementKind {
    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Entrada => "Entrada",
            MovementKind::Salida => "Salida",
            MovementKind::Ajuste => "Ajuste",
        }
    }

    /// Sign applied to the quantity when computing stock
    pub fn sign(&self) -> f64 {
        match self {
            MovementKind::Entrada | MovementKind::Ajuste => 1.0,
            MovementKind::Salida => -1.0,
        }
    }
}

/// Stock movement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: i64,
    pub date: String,
    pub article_code: String,
    pub article_description: String,
    pub kind: MovementKind,
    pub quantity: f64,
    pub reason: Option<String>,
    pub user_name: Option<String>,
}

impl StockMovement {
    pub fn signed_quantity(&self) -> f64 {
        self.kind.sign() * self.quantity
    }
}

/// `GET /api/movimientos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovementListResponse {
    #[serde(rename = "movimientos")]
    pub items: Vec<StockMovement>,
}
