//! Zeitraum-Box: misst die Spanne zwischen zwei Zeitpunkten.
//!
//! Gerichtet — Punkt 0 ist der Start, Punkt 1 das Ende der Messung;
//! die Reihenfolge überlebt jede Bearbeitung (keine Normalisierung).

use super::{fill_style, line_style, trend_line};
use crate::core::ChartScale;
use crate::render::{CursorKind, HitTarget, PaintStyle, PaneView, Shape};
use crate::shared::ToolDefaults;
use crate::tools::LineTool;
use glam::Vec2;

/// Komponiert Füllfläche, Zeit-Grenzen und Richtungs-Pfeil.
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

    // Zeit-Grenzen: vertikale Kanten an Start- und End-Zeitstempel
    for x in [a.x, b.x] {
        view.push(
            Shape::Segment {
                a: Vec2::new(x, min.y),
                b: Vec2::new(x, max.y),
                extend_a: false,
                extend_b: false,
                tolerance,
            },
            line_style(tool),
            HitTarget::Body,
            CursorKind::Grab,
        );
    }

    // Richtungs-Pfeil auf halber Höhe: Start → Ende
    let mitte_y = (min.y + max.y) / 2.0;
    let pfeil_a = Vec2::new(a.x, mitte_y);
    let pfeil_b = Vec2::new(b.x, mitte_y);
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

    fn zeitraum(t0: f64, t1: f64) -> LineTool {
        LineTool::with_points(
            ToolKind::DateRange,
            vec![LogicalPoint::new(t0, 200.0), LogicalPoint::new(t1, 300.0)],
            ToolOptions::default(),
        )
        .expect("Tool erwartet")
    }

    #[test]
    fn test_komposition_flaeche_grenzen_pfeil() {
        let pane = kinds::build_view(&zeitraum(100.0, 400.0), &view(), false, &ToolDefaults::default())
            .expect("View erwartet");
        // Fläche + 2 Grenzen + Pfeillinie + Pfeilspitze
        assert_eq!(pane.entries().len(), 5);
    }

    #[test]
    fn test_rueckwaerts_gemessener_zeitraum_behaelt_reihenfolge() {
        // Ende vor Start ist erlaubt — Richtung trägt Bedeutung
        let mut tool = zeitraum(400.0, 100.0);
        tool.normalize();
        assert_eq!(tool.points()[0].timestamp, 400.0);
        let pane = kinds::build_view(&tool, &view(), false, &ToolDefaults::default());
        assert!(pane.is_some());
    }

    #[test]
    fn test_flaeche_ist_hit_testbar() {
        let v = view();
        let pane = kinds::build_view(&zeitraum(100.0, 400.0), &v, false, &ToolDefaults::default())
            .expect("View erwartet");
        let innen = Vec2::new(
            (v.time_to_pixel(250.0)).unwrap(),
            (v.price_to_pixel(250.0)).unwrap(),
        );
        let hit = pane.hit_test(innen).expect("Treffer erwartet");
        assert_eq!(hit.target, HitTarget::Body);
    }
}
