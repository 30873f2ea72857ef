use serde::{Deserialize, Serialize};

/// Provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub tax_id: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

/// `GET /api/proveedores`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderListResponse {
    #[serde(rename = "proveedores")]
    pub items: Vec<Provider>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_list_wrapper() {
        let body = r#"{"proveedores":[{"id":1,"name":"Bulonera Norte","taxId":null,"contactName":"Raúl","email":null,"phone":null,"address":null,"isActive":true,"createdAt":"2024-01-01"}]}"#;
        let parsed: ProviderListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.items[0].contact_name.as_deref(), Some("Raúl"));
    }
}
