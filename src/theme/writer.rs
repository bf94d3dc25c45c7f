//! Writing widget-tree documents.

use crate::layout::{format_dim_pair, Layout};
use crate::property::tokenizer::quote;
use crate::theme::document::WidgetRecord;
use crate::tree::{Gui, WidgetId};

/// Serialize records into document text, preserving sibling order.
pub fn write_document(records: &[WidgetRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&write_record(record, 0));
    }
    out
}

/// Serialize one record at the given indent level (4 spaces per level).
pub(crate) fn write_record(record: &WidgetRecord, indent: usize) -> String {
    let pad = "    ".repeat(indent);
    let mut out = pad.clone();
    out.push_str(&record.kind);
    if let Some(name) = &record.name {
        out.push('(');
        out.push_str(&quote(name));
        out.push(')');
    }
    out.push_str(" {\n");

    let inner = "    ".repeat(indent + 1);
    if let Some((x, y)) = record.position {
        out.push_str(&format!("{inner}Position = {};\n", format_dim_pair(x, y)));
    }
    if let Some((x, y)) = record.size {
        out.push_str(&format!("{inner}Size = {};\n", format_dim_pair(x, y)));
    }
    if let Some(visible) = record.visible {
        out.push_str(&format!("{inner}Visible = {visible};\n"));
    }
    if let Some(enabled) = record.enabled {
        out.push_str(&format!("{inner}Enabled = {enabled};\n"));
    }
    for (name, value) in record.properties.iter() {
        out.push_str(&format!(
            "{inner}{name} = {};\n",
            value.serialize_indented(indent + 1)
        ));
    }
    for child in &record.children {
        out.push_str(&write_record(child, indent + 1));
    }
    out.push_str(&pad);
    out.push_str("}\n");
    out
}

/// Build the record for one widget: kind, name, the common attributes that
/// differ from their defaults, renderer overrides, and children in z-order.
pub(crate) fn record_of(gui: &Gui, id: WidgetId) -> Option<WidgetRecord> {
    let node = gui.get(id)?;
    let mut record = WidgetRecord::new(node.widget.kind());
    record.name = node.name.clone();
    let default = Layout::default();
    if node.layout.x != default.x || node.layout.y != default.y {
        record.position = Some((node.layout.x, node.layout.y));
    }
    if node.layout.width != default.width || node.layout.height != default.height {
        record.size = Some((node.layout.width, node.layout.height));
    }
    if !node.visible {
        record.visible = Some(false);
    }
    if !node.enabled {
        record.enabled = Some(false);
    }
    if let Some(renderer) = gui.renderer(id) {
        record.properties = renderer.overrides().clone();
    }
    for &child in gui.children(id) {
        if let Some(child_record) = record_of(gui, child) {
            record.children.push(child_record);
        }
    }
    Some(record)
}
