//! Callout: Zeiger-Linie von einem Ziel-Punkt zu einer Text-Plakette.
//!
//! Gerichtet — Punkt 0 ist das Ziel im Chart, Punkt 1 die Verankerung
//! der Plakette. Die Reihenfolge trägt Bedeutung und wird nie
//! normalisiert.

use super::{line_style, trend_line};
use crate::core::ChartScale;
use crate::render::{CursorKind, HitTarget, PaintStyle, PaneView, Shape};
use crate::shared::options::CALLOUT_PLATE_RADIUS_PX;
use crate::shared::ToolDefaults;
use crate::tools::LineTool;

/// Komponiert Zeiger-Linie, Spitze am Ziel und Plakette.
pub(crate) fn compose(
    tool: &LineTool,
    scale: &dyn ChartScale,
    view: &mut PaneView,
    defaults: &ToolDefaults,
) -> Option<()> {
    let points = tool.points();
    let ziel = scale.point_to_pixel(points[0])?;
    let plakette = scale.point_to_pixel(points[1])?;

    view.push(
        Shape::Segment {
            a: plakette,
            b: ziel,
            extend_a: false,
            extend_b: false,
            tolerance: defaults.line_hit_tolerance_px,
        },
        line_style(tool),
        HitTarget::Body,
        CursorKind::Grab,
    );
    if let Some(spitze) = trend_line::arrow_head(plakette, ziel) {
        view.push(
            Shape::Polygon { points: spitze },
            PaintStyle {
                color: tool.options.line_color,
                width: 0.0,
                filled: true,
            },
            HitTarget::Body,
            CursorKind::Grab,
        );
    }
    view.push(
        Shape::Label {
            anchor: plakette,
            radius: CALLOUT_PLATE_RADIUS_PX,
            text: tool.options.text.clone().unwrap_or_default(),
        },
        line_style(tool),
        HitTarget::Body,
        CursorKind::Grab,
    );
    Some(())
}
