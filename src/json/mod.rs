//! Export/Import der Tool-Liste als JSON.
//!
//! Jedes Tool serialisiert als `{ toolType, points, options }` — nur die
//! persistierten Punkte, nie die abgeleiteten Handles. Ein Roundtrip
//! reproduziert Punkte und Options exakt.

use crate::app::ToolCollection;
use crate::core::LogicalPoint;
use crate::tools::{LineTool, ToolKind, ToolOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Persistenz-Format eines einzelnen Tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Typ-Tag (z.B. `"rectangle"`)
    #[serde(rename = "toolType")]
    pub tool_type: ToolKind,
    /// Persistierte Anker-Punkte in semantischer Reihenfolge
    pub points: Vec<LogicalPoint>,
    /// Options-Record (fehlende Felder bekommen Defaults)
    pub options: ToolOptions,
}

/// Serialisiert alle Tools der Sammlung in Z-Reihenfolge.
pub fn export_tools(collection: &ToolCollection) -> Result<String> {
    let records: Vec<ToolRecord> = collection
        .iter()
        .map(|(_, tool)| ToolRecord {
            tool_type: tool.kind(),
            points: tool.points().to_vec(),
            options: tool.options.clone(),
        })
        .collect();
    serde_json::to_string_pretty(&records).context("Tool-Liste konnte nicht serialisiert werden")
}

/// Parst eine exportierte Tool-Liste.
///
/// Unbekannte Typ-Tags oder Punkt-Sätze über dem Budget des Typs sind
/// Fehler; der Import bricht ab statt still Tools zu verwerfen.
pub fn import_tools(json: &str) -> Result<Vec<LineTool>> {
    let records: Vec<ToolRecord> =
        serde_json::from_str(json).context("Tool-Liste konnte nicht geparst werden")?;

    let mut tools = Vec::with_capacity(records.len());
    for record in records {
        let tool = LineTool::with_points(record.tool_type, record.points, record.options)
            .with_context(|| format!("Ungültiges Tool vom Typ {:?}", record.tool_type))?;
        tools.push(tool);
    }
    log::info!("{} Tools importiert", tools.len());
    Ok(tools)
}
