//! Einzelpunkt-Infinite-Tools: horizontale/vertikale Linie, Fadenkreuz.
//!
//! Ein Punkt, unbegrenzte Geometrie. Die Segmente werden auf die
//! Pane-Ausdehnung zugeschnitten komponiert; das Culling hat vorher
//! bereits über die jeweils begrenzte Achse entschieden.

use super::line_style;
use crate::core::ChartScale;
use crate::render::{CursorKind, HitTarget, PaneView, Shape};
use crate::shared::ToolDefaults;
use crate::tools::{LineTool, ToolKind};
use glam::Vec2;

/// Komponiert die Pane-füllenden Segmente.
pub(crate) fn compose(
    tool: &LineTool,
    scale: &dyn ChartScale,
    view: &mut PaneView,
    defaults: &ToolDefaults,
) -> Option<()> {
    let px = scale.point_to_pixel(tool.points()[0])?;
    let [width, height] = scale.pane_size();
    let tolerance = defaults.line_hit_tolerance_px;

    let horizontal = Shape::Segment {
        a: Vec2::new(0.0, px.y),
        b: Vec2::new(width, px.y),
        extend_a: false,
        extend_b: false,
        tolerance,
    };
    let vertikal = Shape::Segment {
        a: Vec2::new(px.x, 0.0),
        b: Vec2::new(px.x, height),
        extend_a: false,
        extend_b: false,
        tolerance,
    };

    match tool.kind() {
        ToolKind::HorizontalLine => {
            view.push(horizontal, line_style(tool), HitTarget::Body, CursorKind::Grab);
        }
        ToolKind::VerticalLine => {
            view.push(vertikal, line_style(tool), HitTarget::Body, CursorKind::Grab);
        }
        ToolKind::CrossLine => {
            view.push(horizontal, line_style(tool), HitTarget::Body, CursorKind::Grab);
            view.push(vertikal, line_style(tool), HitTarget::Body, CursorKind::Grab);
        }
        _ => return None,
    }
    Some(())
}
