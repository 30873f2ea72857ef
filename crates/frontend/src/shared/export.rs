//! CSV export of the current list view (`;` separator, UTF-8 BOM for Excel)

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::list::{ColumnDescriptor, Row};

const SEPARATOR: &str = ";";

/// Headers and formatted cells of the rows, as shown on screen
pub fn table_cells(rows: &[&Row], columns: &[&ColumnDescriptor]) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = columns.iter().map(|c| c.label.to_string()).collect();
    let cells = rows
        .iter()
        .map(|row| columns.iter().map(|c| c.display(row)).collect())
        .collect();
    (headers, cells)
}

pub fn build_csv(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut csv = String::from('\u{FEFF}');
    csv.push_str(&join_line(headers));
    for row in rows {
        csv.push_str(&join_line(row));
    }
    csv
}

fn join_line(cells: &[String]) -> String {
    let mut line = cells
        .iter()
        .map(|cell| escape_csv_cell(cell))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    line.push('\n');
    line
}

/// Cells containing `;`, quotes or line breaks are quoted
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Build the CSV and hand it to the browser as a download
pub fn export_csv(headers: &[String], rows: &[Vec<String>], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("No hay datos para exportar".to_string());
    }
    let blob = create_csv_blob(&build_csv(headers, rows))?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("No se pudo crear el archivo: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    log::info!("exported {}", filename);
    Ok(())
}
