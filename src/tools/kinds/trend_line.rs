//! Zwei-Punkt-Trendlinie: eine parametrisierte Linie statt einer
//! Ray/Extended/Pfeil-Klassenhierarchie.
//!
//! Die Varianten wählt das Options-Record: `extend.right` macht aus der
//! Linie einen Ray, `extend.left + extend.right` eine Extended Line,
//! `cap = Arrow` eine Pfeil-Linie. Geometrie und Hit-Test bleiben
//! identisch.

use super::line_style;
use crate::core::{ChartScale, LogicalPoint};
use crate::render::{CursorKind, HitTarget, PaintStyle, PaneView, Shape};
use crate::shared::options::{ARROW_LENGTH_PX, ARROW_WIDTH_PX};
use crate::shared::ToolDefaults;
use crate::tools::{CapStyle, ExtendFlags, LineTool};
use glam::Vec2;

/// Komponiert Liniensegment + optionale Pfeilspitze.
pub(crate) fn compose(
    tool: &LineTool,
    scale: &dyn ChartScale,
    view: &mut PaneView,
    defaults: &ToolDefaults,
) -> Option<()> {
    let points = tool.points();
    let a = scale.point_to_pixel(points[0])?;
    let b = scale.point_to_pixel(points[1])?;
    let (extend_a, extend_b) = extension_along_time(points[0], points[1], tool.effective_extend());

    view.push(
        Shape::Segment {
            a,
            b,
            extend_a,
            extend_b,
            tolerance: defaults.line_hit_tolerance_px,
        },
        line_style(tool),
        HitTarget::Body,
        CursorKind::Grab,
    );

    if tool.options.cap == CapStyle::Arrow {
        if let Some(spitze) = arrow_head(a, b) {
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
    }
    Some(())
}

/// Bildet `ExtendFlags` auf Segment-Endpunkte ab: "links" heißt Richtung
/// Vergangenheit (früherer Zeitstempel), unabhängig von der
/// Punkt-Reihenfolge.
pub(crate) fn extension_along_time(
    p0: LogicalPoint,
    p1: LogicalPoint,
    extend: ExtendFlags,
) -> (bool, bool) {
    if p0.timestamp <= p1.timestamp {
        (extend.left, extend.right)
    } else {
        (extend.right, extend.left)
    }
}

/// Pfeilspitzen-Polygon am `to`-Ende; `None` bei degenerierter Linie.
pub(crate) fn arrow_head(from: Vec2, to: Vec2) -> Option<Vec<Vec2>> {
    let dir = to - from;
    let len = dir.length();
    if len < f32::EPSILON {
        return None;
    }
    let dir = dir / len;
    let normal = dir.perp();
    let base = to - dir * ARROW_LENGTH_PX;
    Some(vec![
        to,
        base + normal * (ARROW_WIDTH_PX / 2.0),
        base - normal * (ARROW_WIDTH_PX / 2.0),
    ])
}
