//! Gesten-Controller: Erstellung und Handle-Drags.
//!
//! Der Host liefert press/move/release in Pixel-Koordinaten plus
//! Modifier-Zustand; der Controller übersetzt über die Skala in logische
//! Punkte, wendet bei gehaltenem Shift den Constraint-Solver an und ruft
//! nach abgeschlossener Geste `normalize()`. Gesten sind strikt
//! sequentiell (press → move* → release); ein Abbruch braucht keine
//! Aufräumarbeit.

use super::collection::{ToolCollection, ToolId};
use super::frame::Frame;
use crate::core::{ChartScale, LogicalPoint};
use crate::render::{HitResult, HitTarget};
use crate::tools::{CreationAction, DragPhase, LineTool};
use glam::Vec2;

/// Aktive Drag-Geste mit den beim Start eingefrorenen Originalpunkten
/// (Referenzen für den Constraint-Solver).
struct DragGesture {
    tool_id: ToolId,
    handle_index: usize,
    original_handle: Option<LogicalPoint>,
    original_points: Vec<LogicalPoint>,
}

/// Controller für Erstellungs- und Bearbeitungs-Gesten.
#[derive(Default)]
pub struct InteractionController {
    drag: Option<DragGesture>,
    creating: Option<ToolId>,
}

impl InteractionController {
    /// Erstellt einen Controller ohne aktive Geste.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Erstellung ──────────────────────────────────────────────

    /// Startet die interaktive Erstellung: Tool wird leer in die
    /// Sammlung gelegt und selektiert.
    pub fn begin_creation(&mut self, collection: &mut ToolCollection, tool: LineTool) -> ToolId {
        let id = collection.add(tool);
        collection.clear_selection();
        collection.select(id);
        self.creating = Some(id);
        id
    }

    /// Verarbeitet einen Erstellungs-Klick bei `px`.
    ///
    /// Mit Shift wird der Klickpunkt vorab durch den Constraint-Solver
    /// geführt (Phase `Creation`). Punkte ohne logische Entsprechung
    /// werden verworfen. Nach dem letzten Punkt wird normalisiert und
    /// die Erstellung beendet.
    pub fn creation_click(
        &mut self,
        collection: &mut ToolCollection,
        scale: &dyn ChartScale,
        px: Vec2,
        shift: bool,
    ) -> Option<CreationAction> {
        let id = self.creating?;
        let tool = collection.get_mut(id)?;

        let target = if shift {
            let handle_index = tool.points().len();
            let originals = tool.points().to_vec();
            tool.shift_constrained_point(
                handle_index,
                px,
                DragPhase::Creation,
                None,
                &originals,
                scale,
            )
            .point
        } else {
            px
        };

        let Some(point) = scale.pixel_to_point(target) else {
            return Some(CreationAction::Continue);
        };

        let action = tool.add_point(point);
        if action == CreationAction::Finished {
            tool.normalize();
            self.creating = None;
        }
        Some(action)
    }

    /// ID des gerade entstehenden Tools.
    pub fn creating(&self) -> Option<ToolId> {
        self.creating
    }

    /// Bricht die Erstellung ab und entfernt das unfertige Tool.
    pub fn cancel_creation(&mut self, collection: &mut ToolCollection) {
        if let Some(id) = self.creating.take() {
            collection.remove(id);
        }
    }

    // ── Bearbeitung ─────────────────────────────────────────────

    /// Verarbeitet einen Press über das Hit-Ergebnis des Frames.
    ///
    /// Treffer selektiert das Tool (Shift: additiv); ein Handle-Treffer
    /// startet zusätzlich die Drag-Geste. Leerer Raum leert die
    /// Selektion (außer additiv).
    pub fn press_at(
        &mut self,
        collection: &mut ToolCollection,
        frame: &Frame,
        px: Vec2,
        additive: bool,
    ) -> Option<(ToolId, HitResult)> {
        let Some((id, hit)) = frame.hit_test(px) else {
            if !additive {
                collection.clear_selection();
            }
            return None;
        };

        if !additive {
            collection.clear_selection();
        }
        collection.select(id);

        if let HitTarget::Handle(index) = hit.target {
            self.begin_drag(collection, id, index);
        }
        Some((id, hit))
    }

    /// Startet eine Drag-Geste auf einem Handle und friert die
    /// Originalpunkte als Constraint-Referenzen ein.
    pub fn begin_drag(
        &mut self,
        collection: &ToolCollection,
        tool_id: ToolId,
        handle_index: usize,
    ) -> bool {
        let Some(tool) = collection.get(tool_id) else {
            return false;
        };
        if handle_index > tool.max_anchor_index() {
            return false;
        }
        self.drag = Some(DragGesture {
            tool_id,
            handle_index,
            original_handle: tool.point(handle_index),
            original_points: tool.points().to_vec(),
        });
        true
    }

    /// Aktualisiert die Position des gegriffenen Handles.
    ///
    /// Mit Shift läuft der Roh-Punkt durch den Constraint-Solver
    /// (Phase `Editing`). Ohne logische Entsprechung bleibt der
    /// Tool-Zustand unverändert.
    pub fn drag_to(
        &mut self,
        collection: &mut ToolCollection,
        scale: &dyn ChartScale,
        px: Vec2,
        shift: bool,
    ) -> bool {
        let Some(gesture) = &self.drag else {
            return false;
        };
        let Some(tool) = collection.get_mut(gesture.tool_id) else {
            return false;
        };

        let target = if shift {
            tool.shift_constrained_point(
                gesture.handle_index,
                px,
                DragPhase::Editing,
                gesture.original_handle,
                &gesture.original_points,
                scale,
            )
            .point
        } else {
            px
        };

        let Some(point) = scale.pixel_to_point(target) else {
            return false;
        };
        tool.set_point(gesture.handle_index, point);
        true
    }

    /// Beendet die Drag-Geste und normalisiert das Tool.
    pub fn release(&mut self, collection: &mut ToolCollection) {
        if let Some(gesture) = self.drag.take() {
            if let Some(tool) = collection.get_mut(gesture.tool_id) {
                tool.normalize();
            }
        }
    }

    /// Verwirft die aktive Drag-Geste ohne Normalisierung (Abbruch durch
    /// den Host).
    pub fn cancel(&mut self) {
        self.drag = None;
    }

    /// Läuft gerade eine Drag-Geste?
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
