//! Requests issued by the tabular list

use super::config::RowMapper;
use super::row::{Row, RowId};
use crate::shared::api::{ApiClient, ApiError, HttpTransport};
use crate::shared::api_utils::delete_path;

/// `GET {endpoint}` projected through the page's mapper
pub async fn fetch_rows<T: HttpTransport>(
    client: &ApiClient<T>,
    endpoint: &str,
    mapper: &RowMapper,
) -> Result<Vec<Row>, ApiError> {
    let payload = client.get_json(endpoint).await?;
    let rows = mapper(payload)?;
    log::debug!("{}: {} rows", endpoint, rows.len());
    Ok(rows)
}

/// `DELETE {endpoint}/{id}/delete`, returns the backend message
pub async fn delete_row<T: HttpTransport>(
    client: &ApiClient<T>,
    endpoint: &str,
    id: &RowId,
) -> Result<String, ApiError> {
    let response = client.delete(&delete_path(endpoint, id.as_str())).await?;
    Ok(response.message)
}
