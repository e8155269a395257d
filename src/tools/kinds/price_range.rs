//! Preisspannen-Box: misst die Spanne zwischen zwei Preisen.
//!
//! Vertikales Gegenstück zur Zeitraum-Box — und bewusst ohne
//! Extension-Flags: horizontale Extension hat für eine Preisspanne keine
//! Bedeutung, vertikale Extension gibt es im Culling nicht.

use super::{fill_style, line_style, trend_line};
use crate::core::ChartScale;
use crate::render::{CursorKind, HitTarget, PaintStyle, PaneView, Shape};
use crate::shared::ToolDefaults;
use crate::tools::LineTool;
use glam::Vec2;

/// Komponiert Füllfläche, Preis-Grenzen und Richtungs-Pfeil.
pub(crate) fn compose(
    tool: &LineTool,
    scale: &dyn ChartScale,
    view: &mut PaneView,
    defaults: &ToolDefaults,
) -> Option<()> {
    let points = tool.points();
    let a = scale.point_to_pixel(points[0])?;
    let b = scale.point_to_pixel(points[1])?;
    let min = a.min(b);
    let max = a.max(b);
    let tolerance = defaults.line_hit_tolerance_px;

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

    // Preis-Grenzen: horizontale Kanten an Start- und End-Preis
    for y in [a.y, b.y] {
        view.push(
            Shape::Segment {
                a: Vec2::new(min.x, y),
                b: Vec2::new(max.x, y),
                extend_a: false,
                extend_b: false,
                tolerance,
            },
            line_style(tool),
            HitTarget::Body,
            CursorKind::Grab,
        );
    }

    // Richtungs-Pfeil auf halber Breite: Start → Ende
    let mitte_x = (min.x + max.x) / 2.0;
    let pfeil_a = Vec2::new(mitte_x, a.y);
    let pfeil_b = Vec2::new(mitte_x, b.y);
    view.push(
        Shape::Segment {
            a: pfeil_a,
            b: pfeil_b,
            extend_a: false,
            extend_b: false,
            tolerance,
        },
        line_style(tool),
        HitTarget::Body,
        CursorKind::Grab,
    );
    if let Some(spitze) = trend_line::arrow_head(pfeil_a, pfeil_b) {
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
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChartView, LogicalPoint};
    use crate::tools::{kinds, ToolKind, ToolOptions};

    fn view() -> ChartView {
        ChartView::new(0.0, 1000.0, 0.0, 500.0, [1000.0, 500.0])
    }

    fn spanne(p0: f64, p1: f64) -> LineTool {
        LineTool::with_points(
            ToolKind::PriceRange,
            vec![LogicalPoint::new(200.0, p0), LogicalPoint::new(500.0, p1)],
            ToolOptions::default(),
        )
        .expect("Tool erwartet")
    }

    #[test]
    fn test_komposition() {
        let pane = kinds::build_view(&spanne(150.0, 350.0), &view(), false, &ToolDefaults::default())
            .expect("View erwartet");
        assert_eq!(pane.entries().len(), 5);
    }

    #[test]
    fn test_oberhalb_des_pane_gecullt_trotz_extension_flags() {
        // Preisspanne komplett oberhalb: Extension-Flags im Options-Record
        // werden für diesen Typ ignoriert und heben vertikal ohnehin nie auf.
        let mut tool = spanne(900.0, 990.0);
        tool.options.extend.left = true;
        tool.options.extend.right = true;
        assert!(kinds::build_view(&tool, &view(), false, &ToolDefaults::default()).is_none());
    }
}
