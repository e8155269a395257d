//! Tool-Sammlung mit stabilen IDs und deterministischer Reihenfolge.
//!
//! Die Einfüge-Reihenfolge ist zugleich die Z-Reihenfolge: später
//! eingefügte Tools liegen beim Malen oben und gewinnen im Hit-Test.

use crate::tools::LineTool;
use indexmap::{IndexMap, IndexSet};

/// Stabile ID eines Tools in der Sammlung.
pub type ToolId = u64;

/// Sammlung aller Line-Tools eines Charts.
#[derive(Default)]
pub struct ToolCollection {
    tools: IndexMap<ToolId, LineTool>,
    // Geordnetes Set für deterministische Selektionsreihenfolge
    selected: IndexSet<ToolId>,
    next_id: ToolId,
}

impl ToolCollection {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Tool hinzu und vergibt die nächste ID.
    pub fn add(&mut self, tool: LineTool) -> ToolId {
        let id = self.next_id;
        self.next_id += 1;
        self.tools.insert(id, tool);
        id
    }

    /// Entfernt ein Tool (inkl. Selektion). Gibt das entfernte Tool zurück.
    pub fn remove(&mut self, id: ToolId) -> Option<LineTool> {
        self.selected.shift_remove(&id);
        self.tools.shift_remove(&id)
    }

    /// Liest ein Tool.
    pub fn get(&self, id: ToolId) -> Option<&LineTool> {
        self.tools.get(&id)
    }

    /// Mutabler Zugriff auf ein Tool.
    pub fn get_mut(&mut self, id: ToolId) -> Option<&mut LineTool> {
        self.tools.get_mut(&id)
    }

    /// Anzahl der Tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Ist die Sammlung leer?
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tools in Z-Reihenfolge (Einfüge-Reihenfolge).
    pub fn iter(&self) -> impl Iterator<Item = (ToolId, &LineTool)> {
        self.tools.iter().map(|(id, tool)| (*id, tool))
    }

    /// Entfernt alle Tools und Selektionen.
    pub fn clear(&mut self) {
        self.tools.clear();
        self.selected.clear();
    }

    /// Selektiert ein Tool (additiv).
    pub fn select(&mut self, id: ToolId) {
        if self.tools.contains_key(&id) {
            self.selected.insert(id);
        }
    }

    /// Hebt die Selektion eines Tools auf.
    pub fn deselect(&mut self, id: ToolId) {
        self.selected.shift_remove(&id);
    }

    /// Leert die Selektion.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Ist das Tool selektiert?
    pub fn is_selected(&self, id: ToolId) -> bool {
        self.selected.contains(&id)
    }

    /// Selektierte IDs in Selektions-Reihenfolge.
    pub fn selected(&self) -> impl Iterator<Item = ToolId> + '_ {
        self.selected.iter().copied()
    }
}
