//! Static configuration a page hands to the tabular list

use std::collections::HashSet;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::column::ColumnDescriptor;
use super::query::SortSpec;
use super::row::{CellValue, Row, RowId};
use crate::shared::api::ApiError;
use crate::shared::api_utils::record_path;

/// Page sizes offered by the pager
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [25, 50, 100];

/// Projection from the list response body to grid rows
pub type RowMapper = Arc<dyn Fn(serde_json::Value) -> Result<Vec<Row>, ApiError> + Send + Sync>;

/// Mapper for `{ "<key>": [ ...records ] }` bodies decoded into `T`
pub fn wrapped_mapper<T>(key: &'static str, project: fn(&T) -> Row) -> RowMapper
where
    T: DeserializeOwned + 'static,
{
    Arc::new(move |mut payload: serde_json::Value| -> Result<Vec<Row>, ApiError> {
        let items = payload
            .get_mut(key)
            .map(serde_json::Value::take)
            .ok_or_else(|| ApiError::Decode(format!("falta \"{}\" en la respuesta", key)))?;
        let records: Vec<T> = serde_json::from_value(items)?;
        Ok(records.iter().map(project).collect())
    })
}

/// Mapper for untyped bodies: copies `fields` verbatim from each object
pub fn json_mapper(
    key: &'static str,
    id_field: &'static str,
    fields: Vec<&'static str>,
) -> RowMapper {
    Arc::new(move |payload: serde_json::Value| -> Result<Vec<Row>, ApiError> {
        let items = payload
            .get(key)
            .and_then(|v| v.as_array())
            .ok_or_else(|| ApiError::Decode(format!("falta \"{}\" en la respuesta", key)))?;
        items
            .iter()
            .map(|record| -> Result<Row, ApiError> {
                let id = record
                    .get(id_field)
                    .and_then(RowId::from_json)
                    .ok_or_else(|| ApiError::Decode(format!("registro sin \"{}\"", id_field)))?;
                let mut row = Row::new(id);
                for field in &fields {
                    let value = record.get(*field).map(CellValue::from_json).unwrap_or(CellValue::Null);
                    row.set(field, value);
                }
                Ok(row)
            })
            .collect()
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub fn title(&self) -> &'static str {
        match self {
            RowAction::View => "Ver",
            RowAction::Edit => "Editar",
            RowAction::Delete => "Eliminar",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RowAction::View => "eye",
            RowAction::Edit => "edit",
            RowAction::Delete => "trash",
        }
    }
}

/// Independent gates for the three row actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowPermissions {
    pub view: bool,
    pub update: bool,
    pub delete: bool,
}

impl RowPermissions {
    pub fn all() -> Self {
        Self {
            view: true,
            update: true,
            delete: true,
        }
    }

    /// Actions present in every row's menu; denied ones are omitted, not disabled
    pub fn actions(&self) -> Vec<RowAction> {
        let mut actions = Vec::with_capacity(3);
        if self.view {
            actions.push(RowAction::View);
        }
        if self.update {
            actions.push(RowAction::Edit);
        }
        if self.delete {
            actions.push(RowAction::Delete);
        }
        actions
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddAction {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarConfig {
    /// "Nuevo" button; pages set it only for users with the `crear` permission
    pub add: Option<AddAction>,
    pub quick_filter: bool,
    pub column_picker: bool,
    /// CSV file name; export is off when `None`
    pub export: Option<&'static str>,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            add: None,
            quick_filter: true,
            column_picker: true,
            export: None,
        }
    }
}

/// Texts of the delete confirmation modal
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub cancel_label: &'static str,
    pub confirm_label: &'static str,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            title: "¿Eliminar registro?",
            description: "Esta acción no se puede deshacer.",
            cancel_label: "Cancelar",
            confirm_label: "Eliminar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("la lista no tiene endpoint")]
    EmptyEndpoint,
    #[error("la lista no tiene columnas")]
    NoColumns,
    #[error("columna duplicada: {0}")]
    DuplicateColumn(&'static str),
    #[error("el orden por defecto usa una columna inexistente: {0}")]
    UnknownSortField(String),
    #[error("la acción Editar está habilitada pero no hay URL de edición")]
    MissingEditUrl,
    #[error("la acción Ver está habilitada pero no hay URL de detalle")]
    MissingDetailUrl,
    #[error("el tamaño de página debe ser mayor que cero")]
    ZeroPageSize,
}

#[derive(Clone)]
pub struct ListConfig {
    /// DOM id of the page root, `"{entity}--list"`
    pub page_id: &'static str,
    pub title: &'static str,
    pub endpoint: &'static str,
    pub columns: Vec<ColumnDescriptor>,
    pub permissions: RowPermissions,
    pub mapper: RowMapper,
    pub default_sort: SortSpec,
    pub toolbar: ToolbarConfig,
    pub confirm: ConfirmConfig,
    /// Base of the `view` link target when no detail dialog is wired
    pub detail_url: Option<&'static str>,
    pub edit_url: Option<&'static str>,
    pub page_size: usize,
}

impl ListConfig {
    pub fn new(
        page_id: &'static str,
        title: &'static str,
        endpoint: &'static str,
        columns: Vec<ColumnDescriptor>,
        mapper: RowMapper,
    ) -> Self {
        let default_sort = columns
            .first()
            .map(|c| SortSpec::ascending(c.key))
            .unwrap_or_default();
        Self {
            page_id,
            title,
            endpoint,
            columns,
            permissions: RowPermissions::default(),
            mapper,
            default_sort,
            toolbar: ToolbarConfig::default(),
            confirm: ConfirmConfig::default(),
            detail_url: None,
            edit_url: None,
            page_size: PAGE_SIZE_OPTIONS[1],
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.key) {
                return Err(ConfigError::DuplicateColumn(column.key));
            }
        }
        if !self.default_sort.field.is_empty() && !seen.contains(self.default_sort.field.as_str()) {
            return Err(ConfigError::UnknownSortField(self.default_sort.field.clone()));
        }
        if self.permissions.view && self.detail_url.is_none() {
            return Err(ConfigError::MissingDetailUrl);
        }
        if self.permissions.update && self.edit_url.is_none() {
            return Err(ConfigError::MissingEditUrl);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }

    /// Link target for `view`/`edit`; the router performs the navigation
    pub fn navigation_target(&self, action: RowAction, id: &RowId) -> Option<String> {
        let base = match action {
            RowAction::View => self.detail_url?,
            RowAction::Edit => self.edit_url?,
            RowAction::Delete => return None,
        };
        Some(record_path(base, id.as_str()))
    }

    #[cfg(test)]
    pub fn column(&self, key: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Item {
        id: i64,
        name: String,
    }

    fn project(item: &Item) -> Row {
        Row::new(item.id).with("name", item.name.as_str())
    }

    fn config() -> ListConfig {
        ListConfig::new(
            "test--list",
            "Test",
            "/api/items",
            vec![
                ColumnDescriptor::new("name", "Nombre"),
                ColumnDescriptor::new("city", "Ciudad"),
            ],
            wrapped_mapper("items", project),
        )
    }

    #[test]
    fn test_denied_actions_are_omitted() {
        let perms = RowPermissions {
            view: true,
            update: false,
            delete: true,
        };
        assert_eq!(perms.actions(), vec![RowAction::View, RowAction::Delete]);
        assert!(RowPermissions::default().actions().is_empty());
        assert_eq!(RowPermissions::all().actions().len(), 3);
    }

    #[test]
    fn test_wrapped_mapper_maps_every_record() {
        let mapper = wrapped_mapper("items", project);
        let rows = mapper(json!({"items": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]})).unwrap();
        assert_eq!(rows, vec![project(&Item { id: 1, name: "a".into() }), project(&Item { id: 2, name: "b".into() })]);
    }

    #[test]
    fn test_wrapped_mapper_missing_key() {
        let mapper = wrapped_mapper("items", project);
        let err = mapper(json!({"other": []})).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_json_mapper() {
        let mapper = json_mapper("usuarios", "id", vec!["username", "isAdmin"]);
        let rows = mapper(json!({"usuarios": [{"id": 5, "username": "ana", "isAdmin": true, "hash": "x"}]})).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, RowId::new("5"));
        assert_eq!(rows[0].get("isAdmin"), &CellValue::Bool(true));
        assert!(rows[0].get("hash").is_null());

        let err = mapper(json!({"usuarios": [{"username": "sin id"}]})).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_validate() {
        assert_eq!(config().validate(), Ok(()));

        let mut c = config();
        c.columns.push(ColumnDescriptor::new("name", "Otra"));
        assert_eq!(c.validate(), Err(ConfigError::DuplicateColumn("name")));

        let mut c = config();
        c.default_sort = SortSpec::ascending("nope");
        assert_eq!(c.validate(), Err(ConfigError::UnknownSortField("nope".into())));

        let mut c = config();
        c.permissions.update = true;
        assert_eq!(c.validate(), Err(ConfigError::MissingEditUrl));
        c.edit_url = Some("/items");
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn test_view_permission_requires_detail_url() {
        let mut c = config();
        c.permissions.view = true;
        assert_eq!(c.validate(), Err(ConfigError::MissingDetailUrl));

        c.detail_url = Some("/items");
        assert_eq!(c.validate(), Ok(()));
        let id = RowId::new("7");
        assert_eq!(c.navigation_target(RowAction::View, &id).as_deref(), Some("/items/7"));
    }

    #[test]
    fn test_navigation_target() {
        let mut c = config();
        c.detail_url = Some("/clientes");
        c.edit_url = Some("/clientes/editar");
        let id = RowId::new("42");
        assert_eq!(c.navigation_target(RowAction::View, &id).as_deref(), Some("/clientes/42"));
        assert_eq!(c.navigation_target(RowAction::Edit, &id).as_deref(), Some("/clientes/editar/42"));
        assert_eq!(c.navigation_target(RowAction::Delete, &id), None);
    }
}
