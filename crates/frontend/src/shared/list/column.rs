use std::sync::Arc;

use leptos::prelude::AnyView;

use super::row::{CellValue, Row};

/// Value transform applied before display, filtering and export
pub type Formatter = fn(&CellValue) -> String;

/// Custom cell content; receives the whole row
pub type CellRenderer = Arc<dyn Fn(&Row) -> AnyView + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(u32),
    /// Share of the remaining space
    Flex(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

#[derive(Clone)]
pub struct ColumnDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub width: ColumnWidth,
    pub align: Align,
    pub formatter: Option<Formatter>,
    pub renderer: Option<CellRenderer>,
    pub sortable: bool,
    /// Whether the column picker may hide it
    pub hideable: bool,
}

impl ColumnDescriptor {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            width: ColumnWidth::Flex(1),
            align: Align::Left,
            formatter: None,
            renderer: None,
            sortable: true,
            hideable: true,
        }
    }

    pub fn width(mut self, px: u32) -> Self {
        self.width = ColumnWidth::Fixed(px);
        self
    }

    pub fn flex(mut self, share: u32) -> Self {
        self.width = ColumnWidth::Flex(share);
        self
    }

    /// Right-aligned, for amounts and quantities
    pub fn numeric(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub fn format(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn render(mut self, renderer: impl Fn(&Row) -> AnyView + Send + Sync + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn always_visible(mut self) -> Self {
        self.hideable = false;
        self
    }

    /// Text shown in the grid (unless a renderer takes over) and in exports
    pub fn display(&self, row: &Row) -> String {
        let value = row.get(self.key);
        match self.formatter {
            Some(format) => format(value),
            None => value.to_string(),
        }
    }

    pub fn style(&self) -> String {
        let width = match self.width {
            ColumnWidth::Fixed(px) => format!("width: {}px;", px),
            ColumnWidth::Flex(share) => format!("flex: {};", share),
        };
        match self.align {
            Align::Left => width,
            Align::Right => format!("{} text-align: right;", width),
        }
    }
}

impl std::fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::format::money_cell;

    #[test]
    fn test_display_uses_formatter() {
        let row = Row::new(1i64).with("total", 1520.5).with("cliente", "Ana");
        let total = ColumnDescriptor::new("total", "Total").numeric().format(money_cell);
        let client = ColumnDescriptor::new("cliente", "Cliente");
        assert_eq!(total.display(&row), "$ 1.520,50");
        assert_eq!(client.display(&row), "Ana");
    }

    #[test]
    fn test_style() {
        let c = ColumnDescriptor::new("total", "Total").width(120).numeric();
        assert_eq!(c.style(), "width: 120px; text-align: right;");
        assert_eq!(ColumnDescriptor::new("a", "A").flex(2).style(), "flex: 2;");
    }
}
