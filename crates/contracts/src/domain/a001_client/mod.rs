use serde::{Deserialize, Serialize};

/// Client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub tax_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    #[serde(default)]
    pub balance: f64,
    pub is_active: bool,
    pub created_at: String,
}

/// `GET /api/clientes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientListResponse {
    #[serde(rename = "clientes")]
    pub items: Vec<Client>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_wrapper_key() {
        let body = r#"{"clientes":[{"id":42,"name":"Ferretería Sur","taxId":"30-71234567-8","email":null,"phone":null,"address":null,"city":"Rosario","isActive":true,"createdAt":"2024-03-15T10:00:00Z"}]}"#;
        let parsed: ClientListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].id, 42);
        assert_eq!(parsed.items[0].balance, 0.0);
        assert_eq!(parsed.items[0].city.as_deref(), Some("Rosario"));
    }
}
