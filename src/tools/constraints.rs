//! Shift-Drag-Constraints: Achsen-Locks pro Tool-Typ und Geste-Phase.
//!
//! Die Lock-Berechnung läuft komplett im Pixel-Raum: der logische
//! Referenzpunkt wird über die Host-Skala in Pixel konvertiert, vom rohen
//! Input bleibt nur die orthogonale Koordinate erhalten. Damit ist die
//! Constraint-Mathematik von den (nicht-linearen, zoom-abhängigen)
//! Zeit-/Preis-Skalen entkoppelt. Es wird nie Tool-Zustand mutiert — der
//! Solver schlägt nur einen korrigierten Pixel-Punkt vor.

use super::ToolKind;
use crate::core::{ChartScale, LogicalPoint};
use glam::Vec2;

/// Phase der laufenden Geste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// Tool wird gerade platziert
    Creation,
    /// Bestehendes Tool, ein Handle wird gezogen
    Editing,
}

/// Logische Achse, auf die der Drag eingerastet wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapAxis {
    /// Preis-Achse gelockt (Pixel-Y fixiert)
    Price,
    /// Zeit-Achse gelockt (Pixel-X fixiert)
    Time,
}

/// Ergebnis des Constraint-Solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constrained {
    /// Korrigierter Pixel-Punkt für den Aufrufer
    pub point: Vec2,
    /// Gelockte Achse, falls ein Lock griff
    pub snap_axis: Option<SnapAxis>,
}

/// Interner Lock: welche Pixel-Koordinate wird von welchem Referenzpunkt
/// übernommen.
enum AxisLock {
    None,
    /// Pixel-Y vom Referenzpunkt (horizontale Bewegung frei)
    Y(LogicalPoint),
    /// Pixel-X vom Referenzpunkt (vertikale Bewegung frei)
    X(LogicalPoint),
}

/// Berechnet den Shift-constrained Pixel-Punkt.
///
/// `original` ist die logische Originalposition des gegriffenen Handles
/// beim Gesten-Start, `all_original` der Punkt-Satz zum selben Zeitpunkt.
/// Hat der Referenzpunkt keine Bildschirmposition, kommt der rohe Punkt
/// unverändert zurück — die Geste scheitert nie.
pub fn shift_constrained_point(
    kind: ToolKind,
    handle_index: usize,
    raw: Vec2,
    phase: DragPhase,
    original: Option<LogicalPoint>,
    all_original: &[LogicalPoint],
    scale: &dyn ChartScale,
) -> Constrained {
    let lock = lock_for(kind, handle_index, phase, original, all_original);
    match lock {
        AxisLock::None => unconstrained(raw),
        AxisLock::Y(reference) => match scale.price_to_pixel(reference.price) {
            Some(y) => Constrained {
                point: Vec2::new(raw.x, y),
                snap_axis: Some(SnapAxis::Price),
            },
            None => unconstrained(raw),
        },
        AxisLock::X(reference) => match scale.time_to_pixel(reference.timestamp) {
            Some(x) => Constrained {
                point: Vec2::new(x, raw.y),
                snap_axis: Some(SnapAxis::Time),
            },
            None => unconstrained(raw),
        },
    }
}

fn unconstrained(raw: Vec2) -> Constrained {
    Constrained {
        point: raw,
        snap_axis: None,
    }
}

/// Lock-Regel pro Tool-Typ.
fn lock_for(
    kind: ToolKind,
    handle_index: usize,
    phase: DragPhase,
    original: Option<LogicalPoint>,
    all_original: &[LogicalPoint],
) -> AxisLock {
    match kind {
        // Zwei-Punkt-Linie: bei Erstellung liefert Punkt 0 die Referenz
        // (Level-Linie), beim Editieren der jeweils andere Endpunkt.
        // Das Mittelpunkt-Handle bleibt frei.
        ToolKind::TrendLine => match (phase, handle_index) {
            (DragPhase::Creation, _) => y_from(all_original.first().copied()),
            (DragPhase::Editing, 0 | 1) => y_from(all_original.get(1 - handle_index).copied()),
            _ => AxisLock::None,
        },
        // Ecken + Mitte-links/rechts locken das eigene Original-Y
        // (horizontales Resize), Mitte-oben/unten das Original-X.
        ToolKind::Rectangle => match handle_index {
            0..=5 => y_from(original),
            6 | 7 => x_from(original),
            _ => AxisLock::None,
        },
        // Einzelpunkt-Infinite-Tools und Callouts: frei.
        ToolKind::HorizontalLine
        | ToolKind::VerticalLine
        | ToolKind::CrossLine
        | ToolKind::Callout => AxisLock::None,
        // Beim Editieren horizontale Verschiebung ohne Preisänderung:
        // eigenes Original-Y als Referenz. Erstellung frei.
        ToolKind::FibExtension | ToolKind::ElliottWave | ToolKind::DateRange => match phase {
            DragPhase::Editing => y_from(original),
            DragPhase::Creation => AxisLock::None,
        },
        // Preisspanne: vertikale Verschiebung ohne Zeitänderung.
        ToolKind::PriceRange => match phase {
            DragPhase::Editing => x_from(original),
            DragPhase::Creation => AxisLock::None,
        },
    }
}

fn y_from(reference: Option<LogicalPoint>) -> AxisLock {
    match reference {
        Some(p) => AxisLock::Y(p),
        None => AxisLock::None,
    }
}

fn x_from(reference: Option<LogicalPoint>) -> AxisLock {
    match reference {
        Some(p) => AxisLock::X(p),
        None => AxisLock::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ChartView;
    use approx::assert_relative_eq;

    /// 1000×500-Pane: Zeit 0..1000 → X 0..1000, Preis 0..500 → Y 500..0.
    fn view() -> ChartView {
        ChartView::new(0.0, 1000.0, 0.0, 500.0, [1000.0, 500.0])
    }

    #[test]
    fn test_trendlinie_erstellung_lockt_auf_referenz_y() {
        // Punkt 0 bei Pixel (100, 50); Roh-Cursor (260, 300) mit Shift
        // → (260, 50), Preis-Achse gelockt.
        let v = view();
        let p0 = LogicalPoint::new(100.0, 450.0);
        assert_relative_eq!(v.price_to_pixel(p0.price).unwrap(), 50.0);

        let c = shift_constrained_point(
            ToolKind::TrendLine,
            1,
            Vec2::new(260.0, 300.0),
            DragPhase::Creation,
            None,
            &[p0],
            &v,
        );
        assert_relative_eq!(c.point.x, 260.0);
        assert_relative_eq!(c.point.y, 50.0);
        assert_eq!(c.snap_axis, Some(SnapAxis::Price));
    }

    #[test]
    fn test_trendlinie_editieren_lockt_auf_anderen_endpunkt() {
        let v = view();
        let points = [LogicalPoint::new(100.0, 450.0), LogicalPoint::new(400.0, 250.0)];

        // Handle 0 wird gezogen → Referenz ist Punkt 1 (Y = 250)
        let c = shift_constrained_point(
            ToolKind::TrendLine,
            0,
            Vec2::new(50.0, 10.0),
            DragPhase::Editing,
            Some(points[0]),
            &points,
            &v,
        );
        assert_relative_eq!(c.point.y, v.price_to_pixel(250.0).unwrap());
        assert_eq!(c.snap_axis, Some(SnapAxis::Price));
    }

    #[test]
    fn test_trendlinie_mittelpunkt_handle_frei() {
        let v = view();
        let points = [LogicalPoint::new(100.0, 450.0), LogicalPoint::new(400.0, 250.0)];
        let raw = Vec2::new(260.0, 300.0);
        let c = shift_constrained_point(
            ToolKind::TrendLine,
            2,
            raw,
            DragPhase::Editing,
            None,
            &points,
            &v,
        );
        assert_eq!(c.point, raw);
        assert_eq!(c.snap_axis, None);
    }

    #[test]
    fn test_rechteck_ecke_lockt_eigenes_original_y() {
        let v = view();
        let original = LogicalPoint::new(100.0, 450.0);
        let c = shift_constrained_point(
            ToolKind::Rectangle,
            1,
            Vec2::new(700.0, 480.0),
            DragPhase::Editing,
            Some(original),
            &[],
            &v,
        );
        assert_relative_eq!(c.point.x, 700.0);
        assert_relative_eq!(c.point.y, 50.0);
        assert_eq!(c.snap_axis, Some(SnapAxis::Price));
    }

    #[test]
    fn test_rechteck_mitte_oben_lockt_x() {
        let v = view();
        let original = LogicalPoint::new(150.0, 400.0);
        let c = shift_constrained_point(
            ToolKind::Rectangle,
            6,
            Vec2::new(700.0, 480.0),
            DragPhase::Editing,
            Some(original),
            &[],
            &v,
        );
        assert_relative_eq!(c.point.x, 150.0);
        assert_relative_eq!(c.point.y, 480.0);
        assert_eq!(c.snap_axis, Some(SnapAxis::Time));
    }

    #[test]
    fn test_fib_extension_erstellung_frei_editieren_gelockt() {
        let v = view();
        let original = LogicalPoint::new(300.0, 200.0);
        let raw = Vec2::new(500.0, 123.0);

        let frei = shift_constrained_point(
            ToolKind::FibExtension,
            2,
            raw,
            DragPhase::Creation,
            Some(original),
            &[],
            &v,
        );
        assert_eq!(frei.point, raw);
        assert_eq!(frei.snap_axis, None);

        let gelockt = shift_constrained_point(
            ToolKind::FibExtension,
            2,
            raw,
            DragPhase::Editing,
            Some(original),
            &[],
            &v,
        );
        assert_relative_eq!(gelockt.point.y, v.price_to_pixel(200.0).unwrap());
        assert_eq!(gelockt.snap_axis, Some(SnapAxis::Price));
    }

    #[test]
    fn test_fallback_ohne_bildschirmposition() {
        // Degenerierter Ausschnitt: Referenz nicht konvertierbar →
        // roher Punkt, kein Snap.
        let v = ChartView::new(0.0, 0.0, 0.0, 500.0, [1000.0, 500.0]);
        let raw = Vec2::new(260.0, 300.0);
        let c = shift_constrained_point(
            ToolKind::TrendLine,
            1,
            raw,
            DragPhase::Creation,
            None,
            &[LogicalPoint::new(100.0, 450.0)],
            &v,
        );
        assert_eq!(c.point, raw);
        assert_eq!(c.snap_axis, None);
    }

    #[test]
    fn test_einzelpunkt_tools_unconstrained() {
        let v = view();
        let raw = Vec2::new(10.0, 20.0);
        for kind in [
            ToolKind::HorizontalLine,
            ToolKind::VerticalLine,
            ToolKind::CrossLine,
        ] {
            let c = shift_constrained_point(
                kind,
                0,
                raw,
                DragPhase::Editing,
                Some(LogicalPoint::new(1.0, 2.0)),
                &[],
                &v,
            );
            assert_eq!(c.point, raw);
            assert_eq!(c.snap_axis, None);
        }
    }
}
