//! Rechteck aus zwei gegenüberliegenden Ecken, optional horizontal
//! ins Unendliche verlängert (Extension-Band).

use super::{fill_style, line_style};
use crate::core::ChartScale;
use crate::render::{CursorKind, HitTarget, PaneView, Shape};
use crate::shared::ToolDefaults;
use crate::tools::LineTool;
use glam::Vec2;

/// Komponiert Füllfläche + Kontur.
///
/// Mit `extend.left`/`extend.right` wächst das Band bis an den jeweiligen
/// Pane-Rand; die Preis-Ausdehnung bleibt immer die der beiden Punkte
/// (Extension ist horizontal).
pub(crate) fn compose(
    tool: &LineTool,
    scale: &dyn ChartScale,
    view: &mut PaneView,
    defaults: &ToolDefaults,
) -> Option<()> {
    let points = tool.points();
    let a = scale.point_to_pixel(points[0])?;
    let b = scale.point_to_pixel(points[1])?;
    let [width, _] = scale.pane_size();

    let mut min = a.min(b);
    let mut max = a.max(b);
    let extend = tool.effective_extend();
    if extend.left {
        min.x = min.x.min(0.0);
    }
    if extend.right {
        max.x = max.x.max(width);
    }

    view.push(
        Shape::Rect {
            min,
            max,
            filled: true,
            tolerance: 0.0,
        },
        fill_style(tool),
        HitTarget::Body,
        CursorKind::Grab,
    );
    view.push(
        Shape::Rect {
            min,
            max,
            filled: false,
            tolerance: defaults.line_hit_tolerance_px,
        },
        line_style(tool),
        HitTarget::Body,
        CursorKind::Grab,
    );
    Some(())
}
