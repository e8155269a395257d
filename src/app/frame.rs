//! Frame-Aufbau: pro Redraw frisch komponierte Views aller Tools.
//!
//! Ein `Frame` ist ein expliziter "bauen → benutzen → verwerfen"-Wert:
//! er wird aus dem aktuellen Tool-Zustand und Ausschnitt gebaut, der Host
//! malt seine Einträge und beantwortet Hover/Klick darüber, beim nächsten
//! Redraw entsteht ein neuer. Geculllte Tools tauchen nicht auf und sind
//! damit auch nicht klickbar.

use super::collection::{ToolCollection, ToolId};
use crate::core::ChartScale;
use crate::render::{HitResult, PaneView};
use crate::shared::ToolDefaults;
use crate::tools::kinds;
use glam::Vec2;

/// Sichtbare Views eines Redraws in Z-Reihenfolge.
pub struct Frame {
    views: Vec<(ToolId, PaneView)>,
}

impl Frame {
    /// Baut den Frame über alle Tools der Sammlung.
    ///
    /// Handles werden nur für selektierte Tools komponiert.
    pub fn build(
        collection: &ToolCollection,
        scale: &dyn ChartScale,
        defaults: &ToolDefaults,
    ) -> Self {
        let mut views = Vec::new();
        for (id, tool) in collection.iter() {
            if let Some(view) = kinds::build_view(tool, scale, collection.is_selected(id), defaults)
            {
                views.push((id, view));
            }
        }
        Self { views }
    }

    /// Hit-Test über alle sichtbaren Tools, oberstes zuerst
    /// (umgekehrte Z-Reihenfolge).
    pub fn hit_test(&self, p: Vec2) -> Option<(ToolId, HitResult)> {
        self.views
            .iter()
            .rev()
            .find_map(|(id, view)| view.hit_test(p).map(|hit| (*id, hit)))
    }

    /// View eines Tools (falls diesen Frame sichtbar).
    pub fn view(&self, id: ToolId) -> Option<&PaneView> {
        self.views
            .iter()
            .find(|(view_id, _)| *view_id == id)
            .map(|(_, view)| view)
    }

    /// Sichtbare Views in Mal-Reihenfolge.
    pub fn views(&self) -> impl Iterator<Item = (ToolId, &PaneView)> {
        self.views.iter().map(|(id, view)| (*id, view))
    }

    /// Anzahl sichtbarer Tools.
    pub fn visible_count(&self) -> usize {
        self.views.len()
    }
}
