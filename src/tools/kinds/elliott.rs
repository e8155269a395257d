//! Elliott-Wellen-Markierung: Polyline durch die Wellen-Punkte mit
//! Beschriftungs-Plaketten.
//!
//! Impuls (0-1-2-3-4-5) und Korrektur (0-A-B-C) sind ein Typ mit
//! unterschiedlichem Punkt-Budget über das `WavePattern` im
//! Options-Record — keine Subtypen.

use super::line_style;
use crate::core::ChartScale;
use crate::render::{CursorKind, HitTarget, PaneView, Shape};
use crate::shared::options::TEXT_PLATE_RADIUS_PX;
use crate::shared::ToolDefaults;
use crate::tools::LineTool;

/// Komponiert Wellen-Polyline + Beschriftungen.
pub(crate) fn compose(
    tool: &LineTool,
    scale: &dyn ChartScale,
    view: &mut PaneView,
    defaults: &ToolDefaults,
) -> Option<()> {
    let mut pixels = Vec::with_capacity(tool.points().len());
    for point in tool.points() {
        pixels.push(scale.point_to_pixel(*point)?);
    }

    for fenster in pixels.windows(2) {
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

    let labels = tool.options.wave.labels();
    for (px, label) in pixels.iter().zip(labels) {
        view.push(
            Shape::Label {
                anchor: *px,
                radius: TEXT_PLATE_RADIUS_PX,
                text: (*label).to_string(),
            },
            line_style(tool),
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
    use crate::tools::{kinds, ToolKind, ToolOptions, WavePattern};

    fn view() -> ChartView {
        ChartView::new(0.0, 1000.0, 0.0, 500.0, [1000.0, 500.0])
    }

    fn impuls_punkte() -> Vec<LogicalPoint> {
        vec![
            LogicalPoint::new(100.0, 100.0),
            LogicalPoint::new(200.0, 250.0),
            LogicalPoint::new(300.0, 180.0),
            LogicalPoint::new(400.0, 350.0),
            LogicalPoint::new(500.0, 280.0),
            LogicalPoint::new(600.0, 430.0),
        ]
    }

    #[test]
    fn test_impuls_fuenf_segmente_sechs_labels() {
        let tool = LineTool::with_points(
            ToolKind::ElliottWave,
            impuls_punkte(),
            ToolOptions::default(),
        )
        .expect("Tool erwartet");
        let pane = kinds::build_view(&tool, &view(), false, &ToolDefaults::default())
            .expect("View erwartet");
        assert_eq!(pane.entries().len(), 5 + 6);
    }

    #[test]
    fn test_korrektur_nutzt_abc_labels() {
        let mut options = ToolOptions::default();
        options.wave = WavePattern::Correction;
        let tool = LineTool::with_points(
            ToolKind::ElliottWave,
            impuls_punkte().into_iter().take(4).collect(),
            options,
        )
        .expect("Tool erwartet");
        let pane = kinds::build_view(&tool, &view(), false, &ToolDefaults::default())
            .expect("View erwartet");

        let labels: Vec<_> = pane
            .entries()
            .iter()
            .filter_map(|e| match &e.shape {
                Shape::Label { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["0", "A", "B", "C"]);
    }

    #[test]
    fn test_unvollstaendige_welle_nicht_darstellbar() {
        let tool = LineTool::with_points(
            ToolKind::ElliottWave,
            impuls_punkte().into_iter().take(3).collect(),
            ToolOptions::default(),
        )
        .expect("Tool erwartet");
        assert!(kinds::build_view(&tool, &view(), false, &ToolDefaults::default()).is_none());
    }

    #[test]
    fn test_wellen_reihenfolge_wird_nie_normalisiert() {
        let mut punkte = impuls_punkte();
        punkte.reverse();
        let mut tool =
            LineTool::with_points(ToolKind::ElliottWave, punkte.clone(), ToolOptions::default())
                .expect("Tool erwartet");
        tool.normalize();
        assert_eq!(tool.points(), punkte.as_slice());
    }
}
