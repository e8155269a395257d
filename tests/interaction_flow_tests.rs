//! Integrationstests für die Gesten-Flows:
//! - Erstellung mit Shift-Constraint (Level-Linie)
//! - Handle-Drags am Rechteck (virtuelle Anker)
//! - Hit-Test-Priorität über den Frame

use chart_line_tools::{
    ChartScale, ChartView, CreationAction, DragPhase, Frame, HitTarget, InteractionController,
    LineTool, LogicalPoint, SnapAxis, ToolCollection, ToolDefaults, ToolKind, ToolOptions,
    ToolRegistry,
};
use glam::Vec2;

/// 1000×500-Pane: Zeit 0..1000 → X, Preis 0..500 → Y (oben = 500).
fn view() -> ChartView {
    ChartView::new(0.0, 1000.0, 0.0, 500.0, [1000.0, 500.0])
}

fn rechteck(sammlung: &mut ToolCollection) -> chart_line_tools::ToolId {
    sammlung.add(
        LineTool::with_points(
            ToolKind::Rectangle,
            vec![LogicalPoint::new(200.0, 150.0), LogicalPoint::new(600.0, 350.0)],
            ToolOptions::default(),
        )
        .expect("Tool erwartet"),
    )
}

// ─── Erstellung ──────────────────────────────────────────────────────────────

#[test]
fn test_trendlinie_shift_erstellung_konkreter_fall() {
    // Punkt 0 bei Pixel (100, 50); Roh-Cursor (260, 300) mit Shift
    // muss (260, 50) mit Preis-Snap ergeben.
    let v = view();
    let mut sammlung = ToolCollection::new();
    let mut controller = InteractionController::new();
    let registry = ToolRegistry::new();

    let werkzeug = registry.create("trend_line").expect("Factory erwartet");
    controller.begin_creation(&mut sammlung, werkzeug);

    controller
        .creation_click(&mut sammlung, &v, Vec2::new(100.0, 50.0), false)
        .expect("Aktion erwartet");

    // Der Solver selbst liefert den exakten Pixel-Punkt
    let (id, tool) = sammlung.iter().next().expect("Tool erwartet");
    let constrained = tool.shift_constrained_point(
        1,
        Vec2::new(260.0, 300.0),
        DragPhase::Creation,
        None,
        tool.points(),
        &v,
    );
    assert_eq!(constrained.point, Vec2::new(260.0, 50.0));
    assert_eq!(constrained.snap_axis, Some(SnapAxis::Price));

    let action = controller
        .creation_click(&mut sammlung, &v, Vec2::new(260.0, 300.0), true)
        .expect("Aktion erwartet");
    assert_eq!(action, CreationAction::Finished);

    let tool = sammlung.get(id).expect("Tool erwartet");
    let y0 = v.price_to_pixel(tool.points()[0].price).expect("Pixel erwartet");
    let y1 = v.price_to_pixel(tool.points()[1].price).expect("Pixel erwartet");
    assert!((y0 - y1).abs() < 1e-3, "Level-Linie erwartet: {y0} vs {y1}");
}

#[test]
fn test_registry_erstellung_fuer_alle_tags() {
    let registry = ToolRegistry::new();
    let mut sammlung = ToolCollection::new();
    let mut controller = InteractionController::new();
    let v = view();

    for tag in ["horizontal_line", "vertical_line", "cross_line"] {
        let werkzeug = registry.create(tag).expect("Factory erwartet");
        controller.begin_creation(&mut sammlung, werkzeug);
        let action = controller
            .creation_click(&mut sammlung, &v, Vec2::new(400.0, 200.0), false)
            .expect("Aktion erwartet");
        assert_eq!(action, CreationAction::Finished, "{tag} braucht einen Punkt");
    }
    assert_eq!(sammlung.len(), 3);
}

// ─── Handle-Drags ────────────────────────────────────────────────────────────

#[test]
fn test_rechteck_mitte_oben_drag_aendert_genau_einen_preis() {
    let v = view();
    let mut sammlung = ToolCollection::new();
    let mut controller = InteractionController::new();
    let id = rechteck(&mut sammlung);

    let vorher = sammlung.get(id).expect("Tool erwartet").points().to_vec();

    // Handle 6 (Mitte-oben) auf neuen Preis ziehen
    assert!(controller.begin_drag(&sammlung, id, 6));
    let ziel = v
        .point_to_pixel(LogicalPoint::new(400.0, 420.0))
        .expect("Pixel erwartet");
    assert!(controller.drag_to(&mut sammlung, &v, ziel, false));
    controller.release(&mut sammlung);

    let nachher = sammlung.get(id).expect("Tool erwartet").points();
    // Zeitstempel beider Punkte unverändert
    assert_eq!(nachher[0].timestamp, vorher[0].timestamp);
    assert_eq!(nachher[1].timestamp, vorher[1].timestamp);
    // Genau ein Preis geändert (der Punkt mit Maximum: Index 1)
    assert_eq!(nachher[0].price, vorher[0].price);
    assert!((nachher[1].price - 420.0).abs() < 1e-3);
}

#[test]
fn test_rechteck_mitte_links_drag_aendert_genau_einen_zeitstempel() {
    let v = view();
    let mut sammlung = ToolCollection::new();
    let mut controller = InteractionController::new();
    let id = rechteck(&mut sammlung);

    let vorher = sammlung.get(id).expect("Tool erwartet").points().to_vec();

    assert!(controller.begin_drag(&sammlung, id, 4));
    let ziel = v
        .point_to_pixel(LogicalPoint::new(120.0, 250.0))
        .expect("Pixel erwartet");
    assert!(controller.drag_to(&mut sammlung, &v, ziel, false));
    controller.release(&mut sammlung);

    let nachher = sammlung.get(id).expect("Tool erwartet").points();
    assert_eq!(nachher[0].price, vorher[0].price);
    assert_eq!(nachher[1].price, vorher[1].price);
    assert!((nachher[0].timestamp - 120.0).abs() < 1e-3);
    assert_eq!(nachher[1].timestamp, vorher[1].timestamp);
}

#[test]
fn test_shift_drag_rechteck_ecke_bleibt_horizontal() {
    let v = view();
    let mut sammlung = ToolCollection::new();
    let mut controller = InteractionController::new();
    let id = rechteck(&mut sammlung);

    // Ecke 1 mit Shift ziehen: Y bleibt auf dem Original, X folgt
    assert!(controller.begin_drag(&sammlung, id, 1));
    assert!(controller.drag_to(&mut sammlung, &v, Vec2::new(900.0, 20.0), true));
    controller.release(&mut sammlung);

    let tool = sammlung.get(id).expect("Tool erwartet");
    let spaeter = tool
        .points()
        .iter()
        .find(|p| (p.timestamp - 900.0).abs() < 1e-3)
        .expect("verschobener Punkt erwartet");
    assert!((spaeter.price - 350.0).abs() < 1e-3, "Preis muss gelockt bleiben");
}

#[test]
fn test_handle_index_ausser_reichweite_ist_noop() {
    let mut sammlung = ToolCollection::new();
    let mut controller = InteractionController::new();
    let id = rechteck(&mut sammlung);

    // Host-Indizes dürfen einen Frame hinterherhinken — kein Panic, kein Drag
    assert!(!controller.begin_drag(&sammlung, id, 8));
    assert!(!controller.is_dragging());

    let tool = sammlung.get(id).expect("Tool erwartet");
    assert_eq!(tool.point(8), None);
}

// ─── Hit-Test über den Frame ─────────────────────────────────────────────────

#[test]
fn test_handle_gewinnt_gegen_koerper_und_fuellung() {
    let v = view();
    let mut sammlung = ToolCollection::new();
    let id = rechteck(&mut sammlung);
    sammlung.select(id);

    let frame = Frame::build(&sammlung, &v, &ToolDefaults::default());
    // Ecke 0 liegt auf Füllfläche UND Kontur — der Handle muss gewinnen
    let ecke = v
        .point_to_pixel(LogicalPoint::new(200.0, 150.0))
        .expect("Pixel erwartet");
    let (_, hit) = frame.hit_test(ecke).expect("Treffer erwartet");
    assert_eq!(hit.target, HitTarget::Handle(0));
}

#[test]
fn test_geculltes_tool_ist_nicht_klickbar() {
    let v = view();
    let mut sammlung = ToolCollection::new();
    let id = sammlung.add(
        LineTool::with_points(
            ToolKind::Rectangle,
            vec![
                LogicalPoint::new(-900.0, 150.0),
                LogicalPoint::new(-500.0, 350.0),
            ],
            ToolOptions::default(),
        )
        .expect("Tool erwartet"),
    );
    sammlung.select(id);

    let frame = Frame::build(&sammlung, &v, &ToolDefaults::default());
    assert_eq!(frame.visible_count(), 0);
    assert!(frame.hit_test(Vec2::new(500.0, 250.0)).is_none());
}

#[test]
fn test_redraw_ist_idempotent() {
    let v = view();
    let mut sammlung = ToolCollection::new();
    let id = rechteck(&mut sammlung);
    sammlung.select(id);

    let tool = sammlung.get(id).expect("Tool erwartet");
    for index in 0..=tool.max_anchor_index() {
        assert_eq!(tool.point(index), tool.point(index));
    }
    assert_eq!(tool.culling_state(&v), tool.culling_state(&v));

    let erste = Frame::build(&sammlung, &v, &ToolDefaults::default());
    let zweite = Frame::build(&sammlung, &v, &ToolDefaults::default());
    assert_eq!(erste.visible_count(), zweite.visible_count());
}
