//! Integrationstests für das Viewport-Culling über die öffentliche API:
//! Extension-Aufhebung, Orientierungs-Regeln, Segment-Fächer.

use chart_line_tools::{
    ChartView, CullingState, ExtendFlags, LineTool, LogicalPoint, ToolKind, ToolOptions,
};

/// 1000×500-Pane: Zeit 0..1000, Preis 0..500.
fn view() -> ChartView {
    ChartView::new(0.0, 1000.0, 0.0, 500.0, [1000.0, 500.0])
}

fn rechteck(p0: (f64, f64), p1: (f64, f64), extend: ExtendFlags) -> LineTool {
    let mut options = ToolOptions::default();
    options.extend = extend;
    LineTool::with_points(
        ToolKind::Rectangle,
        vec![
            LogicalPoint::new(p0.0, p0.1),
            LogicalPoint::new(p1.0, p1.1),
        ],
        options,
    )
    .expect("Tool erwartet")
}

#[test]
fn test_rechteck_links_draussen_extension_entscheidet() {
    // Sonderfall: identische Punkte, nur das Flag unterscheidet sich
    let ohne = rechteck((-900.0, 200.0), (-500.0, 300.0), ExtendFlags::default());
    assert_eq!(ohne.culling_state(&view()), CullingState::OffScreenLeft);

    let mit = rechteck(
        (-900.0, 200.0),
        (-500.0, 300.0),
        ExtendFlags {
            left: false,
            right: true,
        },
    );
    assert_eq!(mit.culling_state(&view()), CullingState::Visible);
}

#[test]
fn test_rechteck_rechts_draussen_symmetrisch() {
    let ohne = rechteck((1500.0, 200.0), (1900.0, 300.0), ExtendFlags::default());
    assert_eq!(ohne.culling_state(&view()), CullingState::OffScreenRight);

    let mit = rechteck(
        (1500.0, 200.0),
        (1900.0, 300.0),
        ExtendFlags {
            left: true,
            right: false,
        },
    );
    assert_eq!(mit.culling_state(&view()), CullingState::Visible);
}

#[test]
fn test_extension_hebt_oben_unten_nie_auf() {
    let beide = ExtendFlags {
        left: true,
        right: true,
    };
    let oben = rechteck((100.0, 700.0), (400.0, 900.0), beide);
    assert_eq!(oben.culling_state(&view()), CullingState::OffScreenTop);

    let unten = rechteck((100.0, -400.0), (400.0, -200.0), beide);
    assert_eq!(unten.culling_state(&view()), CullingState::OffScreenBottom);
}

#[test]
fn test_horizontale_linie_orientierung() {
    // Preis außerhalb: gecullt, egal wie absurd der Zeitstempel ist
    let draussen = LineTool::with_points(
        ToolKind::HorizontalLine,
        vec![LogicalPoint::new(123_456.0, 900.0)],
        ToolOptions::default(),
    )
    .expect("Tool erwartet");
    assert_eq!(draussen.culling_state(&view()), CullingState::OffScreenTop);

    // Preis im Bereich: nie gecullt, auch weit außerhalb der Zeitachse
    let drin = LineTool::with_points(
        ToolKind::HorizontalLine,
        vec![LogicalPoint::new(-123_456.0, 250.0)],
        ToolOptions::default(),
    )
    .expect("Tool erwartet");
    assert_eq!(drin.culling_state(&view()), CullingState::Visible);
}

#[test]
fn test_vertikale_linie_orientierung() {
    let draussen = LineTool::with_points(
        ToolKind::VerticalLine,
        vec![LogicalPoint::new(1500.0, 123_456.0)],
        ToolOptions::default(),
    )
    .expect("Tool erwartet");
    assert_eq!(draussen.culling_state(&view()), CullingState::OffScreenRight);

    let drin = LineTool::with_points(
        ToolKind::VerticalLine,
        vec![LogicalPoint::new(500.0, -123_456.0)],
        ToolOptions::default(),
    )
    .expect("Tool erwartet");
    assert_eq!(drin.culling_state(&view()), CullingState::Visible);
}

#[test]
fn test_fadenkreuz_braucht_nur_konvertierbare_punkte() {
    let weit_draussen = LineTool::with_points(
        ToolKind::CrossLine,
        vec![LogicalPoint::new(-99_999.0, 99_999.0)],
        ToolOptions::default(),
    )
    .expect("Tool erwartet");
    assert_eq!(weit_draussen.culling_state(&view()), CullingState::Visible);
}

#[test]
fn test_unvollstaendiges_tool_nie_darstellbar() {
    let mut tool = LineTool::new(ToolKind::Rectangle, ToolOptions::default());
    assert_eq!(tool.culling_state(&view()), CullingState::FullyOffScreen);

    tool.add_point(LogicalPoint::new(100.0, 200.0));
    assert_eq!(tool.culling_state(&view()), CullingState::FullyOffScreen);

    tool.add_point(LogicalPoint::new(400.0, 300.0));
    assert_eq!(tool.culling_state(&view()), CullingState::Visible);
}

#[test]
fn test_degenerierter_ausschnitt_cullt_alles() {
    let tool = rechteck((100.0, 200.0), (400.0, 300.0), ExtendFlags::default());
    let kaputt = ChartView::new(0.0, 1000.0, 0.0, 500.0, [0.0, 0.0]);
    assert_eq!(tool.culling_state(&kaputt), CullingState::FullyOffScreen);
}
