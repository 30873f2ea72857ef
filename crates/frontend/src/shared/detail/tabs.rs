//! Tab descriptions for the detail dialog and the text they render to

use serde_json::Value;

use crate::shared::format::{
    format_bool, format_date, format_datetime, format_money, format_number_with_decimals,
};

/// Shown for absent values and while the record is loading
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Text,
    Date,
    DateTime,
    Money,
    Number,
    Bool,
    /// Array of scalars joined with ", "
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub label: &'static str,
    /// Dot path into the record, e.g. `"cliente.nombre"` or `"lineas.0.total"`
    pub path: &'static str,
    pub format: FieldFormat,
}

impl FieldSpec {
    pub const fn new(label: &'static str, path: &'static str, format: FieldFormat) -> Self {
        Self {
            label,
            path,
            format,
        }
    }

    pub const fn text(label: &'static str, path: &'static str) -> Self {
        Self::new(label, path, FieldFormat::Text)
    }

    pub const fn date(label: &'static str, path: &'static str) -> Self {
        Self::new(label, path, FieldFormat::Date)
    }

    pub const fn money(label: &'static str, path: &'static str) -> Self {
        Self::new(label, path, FieldFormat::Money)
    }

    pub const fn number(label: &'static str, path: &'static str) -> Self {
        Self::new(label, path, FieldFormat::Number)
    }

    pub const fn flag(label: &'static str, path: &'static str) -> Self {
        Self::new(label, path, FieldFormat::Bool)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TabContent {
    /// Label/value grid
    Fields(Vec<FieldSpec>),
    /// Nested array of the record; `columns` paths are relative to each item
    Table {
        path: &'static str,
        columns: Vec<FieldSpec>,
    },
    /// Pretty-printed raw record
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailTab {
    pub name: &'static str,
    pub content: TabContent,
}

impl DetailTab {
    pub fn fields(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            name,
            content: TabContent::Fields(fields),
        }
    }

    pub fn table(name: &'static str, path: &'static str, columns: Vec<FieldSpec>) -> Self {
        Self {
            name,
            content: TabContent::Table { path, columns },
        }
    }

    pub fn json() -> Self {
        Self {
            name: "JSON",
            content: TabContent::Json,
        }
    }
}

/// What a detail view shows for one entity
#[derive(Debug, Clone, PartialEq)]
pub struct DetailConfig {
    /// Entity name shown in the header, e.g. "Cliente"
    pub title: &'static str,
    pub endpoint: &'static str,
    /// Record field appended to the header once loaded
    pub caption_path: &'static str,
    /// List route the detail page links back to
    pub list_url: &'static str,
    pub tabs: Vec<DetailTab>,
}

impl DetailConfig {
    pub fn caption(&self, record: Option<&Value>) -> String {
        match record.and_then(|r| lookup(r, self.caption_path)) {
            Some(value) => format!("{}: {}", self.title, format_value(Some(value), FieldFormat::Text)),
            None => self.title.to_string(),
        }
    }
}

pub fn lookup<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(record, |value, segment| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

pub fn format_value(value: Option<&Value>, format: FieldFormat) -> String {
    let value = match value {
        None | Some(Value::Null) => return PLACEHOLDER.to_string(),
        Some(v) => v,
    };
    let text = match (format, value) {
        (FieldFormat::Date, Value::String(s)) => format_date(s),
        (FieldFormat::DateTime, Value::String(s)) => format_datetime(s),
        (FieldFormat::Money, Value::Number(n)) => n.as_f64().map(format_money).unwrap_or_default(),
        (FieldFormat::Number, Value::Number(n)) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 => format_number_with_decimals(f, 0),
            Some(f) => format_number_with_decimals(f, 2),
            None => n.to_string(),
        },
        (FieldFormat::List, Value::Array(items)) => items
            .iter()
            .map(|item| format_value(Some(item), FieldFormat::Text))
            .collect::<Vec<_>>()
            .join(", "),
        (_, Value::Bool(b)) => format_bool(*b).to_string(),
        (_, Value::String(s)) => s.clone(),
        (_, other) => other.to_string(),
    };
    if text.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        text
    }
}

/// Label/value pairs; every value is the placeholder while `record` is `None`
pub fn field_rows(record: Option<&Value>, fields: &[FieldSpec]) -> Vec<(&'static str, String)> {
    fields
        .iter()
        .map(|f| {
            let value = record.and_then(|r| lookup(r, f.path));
            (f.label, format_value(value, f.format))
        })
        .collect()
}

/// Header labels of a table tab, detached from the borrowed config
pub fn column_labels(columns: &[FieldSpec]) -> Vec<&'static str> {
    columns.iter().map(|c| c.label).collect()
}

pub fn table_rows(record: Option<&Value>, path: &str, columns: &[FieldSpec]) -> Vec<Vec<String>> {
    let Some(Value::Array(items)) = record.and_then(|r| lookup(r, path)) else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|c| format_value(lookup(item, c.path), c.format))
                .collect()
        })
        .collect()
}

pub fn json_text(record: Option<&Value>) -> String {
    record
        .and_then(|r| serde_json::to_string_pretty(r).ok())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sale() -> Value {
        json!({
            "id": 3,
            "numero": "V-0003",
            "fecha": "2024-03-15",
            "total": 1500.5,
            "cliente": { "nombre": "Ana" },
            "pagada": true,
            "lineas": [
                { "articulo": "Tornillo", "cantidad": 10, "subtotal": 1000 },
                { "articulo": "Tuerca", "cantidad": 2.5, "subtotal": 500.5 }
            ]
        })
    }

    #[test]
    fn test_lookup_follows_objects_and_array_indexes() {
        let record = sale();
        assert_eq!(lookup(&record, "cliente.nombre"), Some(&json!("Ana")));
        assert_eq!(lookup(&record, "lineas.1.articulo"), Some(&json!("Tuerca")));
        assert_eq!(lookup(&record, "lineas.9.articulo"), None);
        assert_eq!(lookup(&record, "numero.x"), None);
    }

    #[test]
    fn test_fields_are_formatted() {
        let record = sale();
        let rows = field_rows(
            Some(&record),
            &[
                FieldSpec::text("Número", "numero"),
                FieldSpec::date("Fecha", "fecha"),
                FieldSpec::money("Total", "total"),
                FieldSpec::flag("Pagada", "pagada"),
                FieldSpec::text("Vendedor", "vendedor"),
            ],
        );
        assert_eq!(
            rows,
            vec![
                ("Número", "V-0003".to_string()),
                ("Fecha", "15/03/2024".to_string()),
                ("Total", "$ 1.500,50".to_string()),
                ("Pagada", "Sí".to_string()),
                ("Vendedor", PLACEHOLDER.to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_record_renders_placeholders() {
        let rows = field_rows(None, &[FieldSpec::text("Nombre", "nombre")]);
        assert_eq!(rows, vec![("Nombre", PLACEHOLDER.to_string())]);
        assert!(table_rows(None, "lineas", &[FieldSpec::text("A", "a")]).is_empty());
        assert_eq!(json_text(None), PLACEHOLDER);
    }

    #[test]
    fn test_nested_table_rows() {
        let record = sale();
        let rows = table_rows(
            Some(&record),
            "lineas",
            &[
                FieldSpec::text("Artículo", "articulo"),
                FieldSpec::number("Cantidad", "cantidad"),
            ],
        );
        assert_eq!(
            rows,
            vec![
                vec!["Tornillo".to_string(), "10".to_string()],
                vec!["Tuerca".to_string(), "2,50".to_string()],
            ]
        );
    }

    #[test]
    fn test_table_header_labels_follow_columns() {
        let columns = [
            FieldSpec::text("Artículo", "articulo"),
            FieldSpec::number("Cantidad", "cantidad"),
        ];
        assert_eq!(column_labels(&columns), vec!["Artículo", "Cantidad"]);
        assert!(column_labels(&[]).is_empty());
    }

    #[test]
    fn test_caption_uses_record_field_when_loaded() {
        let config = DetailConfig {
            title: "Venta",
            endpoint: "/api/ventas",
            caption_path: "numero",
            list_url: "/ventas",
            tabs: vec![DetailTab::json()],
        };
        assert_eq!(config.caption(None), "Venta");
        assert_eq!(config.caption(Some(&sale())), "Venta: V-0003");
    }

    #[test]
    fn test_list_format_joins_items() {
        let value = json!(["ventas.ver", "ventas.crear"]);
        assert_eq!(format_value(Some(&value), FieldFormat::List), "ventas.ver, ventas.crear");
        assert_eq!(format_value(Some(&json!([])), FieldFormat::List), PLACEHOLDER);
    }
}
