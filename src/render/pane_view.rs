//! Pro Frame komponierte, hit-testbare Darstellung eines Tools.
//!
//! Eine `PaneView` wird pro Redraw frisch aus dem aktuellen Tool-Zustand
//! gebaut, benutzt und verworfen — kein langlebiger, geteilter
//! Renderer-Zustand. Hit-Tests laufen in umgekehrter Einfüge-Reihenfolge:
//! zuletzt eingefügte Shapes (die Handles) gewinnen immer gegen den
//! darunter liegenden Körper.

use super::shapes::{CursorKind, HitResult, HitTarget, PaintStyle, Shape};
use glam::Vec2;

/// Ein Eintrag der View: Shape + Stil + logisches Ziel.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeEntry {
    /// Das Pixel-Shape
    pub shape: Shape,
    /// Stil-Daten für den Host-Maler
    pub style: PaintStyle,
    /// Logisches Element, das dieses Shape repräsentiert
    pub target: HitTarget,
    /// Cursor-Vorschlag bei Treffer
    pub cursor: CursorKind,
}

/// Komponierte Frame-Darstellung eines Tools.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaneView {
    entries: Vec<ShapeEntry>,
}

impl PaneView {
    /// Erstellt eine leere View.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt ein Shape an (Mal-Reihenfolge; Handles zuletzt einfügen).
    pub fn push(&mut self, shape: Shape, style: PaintStyle, target: HitTarget, cursor: CursorKind) {
        self.entries.push(ShapeEntry {
            shape,
            style,
            target,
            cursor,
        });
    }

    /// Einträge in Mal-Reihenfolge (für den Host).
    pub fn entries(&self) -> &[ShapeEntry] {
        &self.entries
    }

    /// Keine Shapes komponiert?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hit-Test in umgekehrter Einfüge-Reihenfolge — das zuletzt
    /// gemalte (oberste) Shape gewinnt.
    pub fn hit_test(&self, p: Vec2) -> Option<HitResult> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.shape.contains(p))
            .map(|entry| HitResult {
                target: entry.target,
                cursor: entry.cursor,
            })
    }
}
