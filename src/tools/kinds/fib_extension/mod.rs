//! Trend-basierte Fibonacci-Extension: Basis-Bewegung 0→1, Rücklauf zu
//! Punkt 2, von dort projizierter Level-Fächer.
//!
//! Die Level-Segmente gehen als unabhängige Segmente ins Culling ein —
//! das Tool ist sichtbar, sobald irgendein Level (oder die Basis) den
//! Pane schneidet, nicht erst wenn die Bounding-Box passt.
//!
//! Aufgeteilt in:
//! - `geometry` — Level-Projektion und abgeflachte Punktliste
//! - `tests`    — Projektions- und Culling-Fälle

mod geometry;

pub(crate) use geometry::{flattened_points, level_segments};

use super::line_style;
use crate::core::ChartScale;
use crate::render::{CursorKind, HitTarget, PaintStyle, PaneView, Shape};
use crate::shared::options::TEXT_PLATE_RADIUS_PX;
use crate::shared::ToolDefaults;
use crate::tools::LineTool;


/// Komponiert Basis-Polyline + Level-Fächer + Level-Beschriftungen.
pub(crate) fn compose(
    tool: &LineTool,
    scale: &dyn ChartScale,
    view: &mut PaneView,
    defaults: &ToolDefaults,
) -> Option<()> {
    let points = tool.points();
    let basis: Vec<_> = points
        .iter()
        .map(|p| scale.point_to_pixel(*p))
        .collect::<Option<_>>()?;

    for fenster in basis.windows(2) {
        view.push(
            Shape::Segment {
                a: fenster[0],
                b: fenster[1],
                extend_a: false,
                extend_b: false,
                tolerance: defaults.line_hit_tolerance_px,
            },
            line_style(tool),
            HitTarget::Body,
            CursorKind::Grab,
        );
    }

    let extend = tool.effective_extend();
    for (level, start, ende) in level_segments(tool) {
        let a = scale.point_to_pixel(start)?;
        let b = scale.point_to_pixel(ende)?;
        view.push(
            Shape::Segment {
                a,
                b,
                extend_a: extend.left,
                extend_b: extend.right,
                tolerance: defaults.line_hit_tolerance_px,
            },
            PaintStyle {
                color: level.color,
                width: tool.options.line_width,
                filled: false,
            },
            HitTarget::Body,
            CursorKind::Grab,
        );
        view.push(
            Shape::Label {
                anchor: a,
                radius: TEXT_PLATE_RADIUS_PX,
                text: format!("{}", level.coeff),
            },
            PaintStyle {
                color: level.color,
                width: 0.0,
                filled: false,
            },
            HitTarget::Body,
            CursorKind::Grab,
        );
    }
    Some(())
}
