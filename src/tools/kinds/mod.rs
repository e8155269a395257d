//! Tool-spezifische Geometrie und Frame-Komposition.
//!
//! Jeder Kind-Modul komponiert die Körper-Shapes seines Tool-Typs in
//! eine `PaneView`; Handles hängt der gemeinsame Dispatcher zuletzt an,
//! damit sie im Hit-Test immer gewinnen. Das Culling läuft vor jeder
//! Komposition — ein geculltes Tool bekommt keine View.
//!
//! Aufgeteilt in:
//! - `trend_line`     — Zwei-Punkt-Linie inkl. Ray/Extended/Pfeil-Varianten
//! - `infinite_line`  — horizontale/vertikale Linie, Fadenkreuz
//! - `rectangle`      — Rechteck mit Extension-Bändern
//! - `date_range`     — Zeitraum-Box (gerichtet)
//! - `price_range`    — Preisspannen-Box (gerichtet)
//! - `callout`        — Zeiger + Text-Plakette
//! - `elliott`        — Wellen-Polyline mit Beschriftungs-Plaketten
//! - `fib_extension`  — Basis-Trend + projizierter Level-Fächer

pub mod callout;
pub mod date_range;
pub mod elliott;
pub mod fib_extension;
pub mod infinite_line;
pub mod price_range;
pub mod rectangle;
pub mod trend_line;

use super::{LineTool, ToolKind};
use crate::core::ChartScale;
use crate::render::{CursorKind, HitTarget, PaintStyle, PaneView, Shape};
use crate::shared::ToolDefaults;

/// Baut die Frame-Darstellung eines Tools.
///
/// `None` wenn das Tool diesen Frame gecullt ist oder ein Punkt keine
/// Bildschirmposition hat — dann existiert auch kein Hit-Ziel.
/// Handles werden nur für selektierte Tools komponiert.
pub fn build_view(
    tool: &LineTool,
    scale: &dyn ChartScale,
    selected: bool,
    defaults: &ToolDefaults,
) -> Option<PaneView> {
    if !tool.culling_state(scale).is_visible() {
        return None;
    }

    let mut view = PaneView::new();
    match tool.kind() {
        ToolKind::TrendLine => trend_line::compose(tool, scale, &mut view, defaults)?,
        ToolKind::HorizontalLine | ToolKind::VerticalLine | ToolKind::CrossLine => {
            infinite_line::compose(tool, scale, &mut view, defaults)?
        }
        ToolKind::Rectangle => rectangle::compose(tool, scale, &mut view, defaults)?,
        ToolKind::DateRange => date_range::compose(tool, scale, &mut view, defaults)?,
        ToolKind::PriceRange => price_range::compose(tool, scale, &mut view, defaults)?,
        ToolKind::Callout => callout::compose(tool, scale, &mut view, defaults)?,
        ToolKind::ElliottWave => elliott::compose(tool, scale, &mut view, defaults)?,
        ToolKind::FibExtension => fib_extension::compose(tool, scale, &mut view, defaults)?,
    }

    if selected {
        push_handles(tool, scale, &mut view, defaults);
    }
    Some(view)
}

/// Hängt die Handle-Marker aller interaktiven Indizes an (zuletzt —
/// Handles gewinnen im Hit-Test gegen den Körper).
fn push_handles(tool: &LineTool, scale: &dyn ChartScale, view: &mut PaneView, defaults: &ToolDefaults) {
    for index in 0..=tool.max_anchor_index() {
        let Some(point) = tool.point(index) else {
            continue;
        };
        let Some(px) = scale.point_to_pixel(point) else {
            continue;
        };
        view.push(
            Shape::Marker {
                center: px,
                radius: defaults.handle_hit_radius_px,
            },
            PaintStyle {
                color: defaults.handle_color,
                width: 1.0,
                filled: true,
            },
            HitTarget::Handle(index),
            handle_cursor(tool.kind(), index),
        );
    }
}

/// Cursor-Vorschlag pro Handle: Rechteck-Kantenmitten zeigen die
/// Resize-Richtung an, alles andere den Standard-Zeiger.
fn handle_cursor(kind: ToolKind, index: usize) -> CursorKind {
    match (kind, index) {
        (ToolKind::Rectangle, 4 | 5) => CursorKind::HorizontalResize,
        (ToolKind::Rectangle, 6 | 7) => CursorKind::VerticalResize,
        _ => CursorKind::Default,
    }
}

/// Linien-Stil aus dem Options-Record.
pub(crate) fn line_style(tool: &LineTool) -> PaintStyle {
    PaintStyle {
        color: tool.options.line_color,
        width: tool.options.line_width,
        filled: false,
    }
}

/// Füll-Stil aus dem Options-Record.
pub(crate) fn fill_style(tool: &LineTool) -> PaintStyle {
    PaintStyle {
        color: tool.options.fill_color,
        width: 0.0,
        filled: true,
    }
}
