//! Pixel-Shape-Primitive mit Punkt-in-Form-Abfragen.
//!
//! Die Primitive nehmen Screen-Koordinaten plus Stil-Daten entgegen und
//! beantworten Hit-Abfragen; das eigentliche Malen übernimmt der Host
//! über die pro Frame komponierten Einträge. Tools rechnen nie eigene
//! Hit-Geometrie — sie delegieren immer hierher.

use glam::Vec2;

/// Welches logische Element eines Tools getroffen wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Körper des Tools (Linie, Fläche, Level)
    Body,
    /// Interaktiver Handle mit Index
    Handle(usize),
}

/// Cursor-Vorschlag für den Host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    /// Standard-Zeiger
    Default,
    /// Verschieben (Körper)
    Grab,
    /// Horizontales Resize (linke/rechte Kante)
    HorizontalResize,
    /// Vertikales Resize (obere/untere Kante)
    VerticalResize,
}

/// Ergebnis eines Hit-Tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitResult {
    /// Getroffenes logisches Element
    pub target: HitTarget,
    /// Cursor-Vorschlag
    pub cursor: CursorKind,
}

/// Stil-Daten für den Host-Maler (werden unverändert durchgereicht).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    /// Farbe (RGBA)
    pub color: [f32; 4],
    /// Linienstärke in Screen-Pixeln
    pub width: f32,
    /// Fläche füllen statt nur Kontur
    pub filled: bool,
}

/// Ein hit-testbares Shape-Primitiv im Pixel-Raum.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Liniensegment, optional über die Endpunkte hinaus unendlich
    Segment {
        /// Startpunkt
        a: Vec2,
        /// Endpunkt
        b: Vec2,
        /// Über `a` hinaus verlängert
        extend_a: bool,
        /// Über `b` hinaus verlängert
        extend_b: bool,
        /// Hit-Toleranz in Pixeln
        tolerance: f32,
    },
    /// Achsen-paralleles Rechteck
    Rect {
        /// Ecke mit minimalen Koordinaten
        min: Vec2,
        /// Ecke mit maximalen Koordinaten
        max: Vec2,
        /// Gefüllt: Innenfläche trifft; sonst nur der Rand
        filled: bool,
        /// Hit-Toleranz in Pixeln
        tolerance: f32,
    },
    /// Geschlossenes Polygon (Pfeilspitzen, Plaketten)
    Polygon {
        /// Eckpunkte in Umlauf-Reihenfolge
        points: Vec<Vec2>,
    },
    /// Runder Handle-Marker
    Marker {
        /// Mittelpunkt
        center: Vec2,
        /// Hit-Radius in Pixeln
        radius: f32,
    },
    /// Runde Text-Plakette (Wellen-Beschriftung, Callout-Label)
    Label {
        /// Verankerung (Mittelpunkt)
        anchor: Vec2,
        /// Hit-Radius in Pixeln
        radius: f32,
        /// Anzeigetext
        text: String,
    },
}

impl Shape {
    /// Beantwortet die Punkt-in-Form-Abfrage.
    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            Shape::Segment {
                a,
                b,
                extend_a,
                extend_b,
                tolerance,
            } => distance_to_segment(p, *a, *b, *extend_a, *extend_b) <= *tolerance,
            Shape::Rect {
                min,
                max,
                filled,
                tolerance,
            } => {
                let outer_min = *min - Vec2::splat(*tolerance);
                let outer_max = *max + Vec2::splat(*tolerance);
                if !point_in_rect(p, outer_min, outer_max) {
                    return false;
                }
                if *filled {
                    return true;
                }
                // Nur der Rand: Punkte tief im Inneren treffen nicht
                let inner_min = *min + Vec2::splat(*tolerance);
                let inner_max = *max - Vec2::splat(*tolerance);
                inner_min.x >= inner_max.x
                    || inner_min.y >= inner_max.y
                    || !point_in_rect(p, inner_min, inner_max)
            }
            Shape::Polygon { points } => point_in_polygon(p, points),
            Shape::Marker { center, radius } => p.distance(*center) <= *radius,
            Shape::Label { anchor, radius, .. } => p.distance(*anchor) <= *radius,
        }
    }
}

/// Abstand eines Punkts zu einem (ggf. verlängerten) Segment.
fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2, extend_a: bool, extend_b: bool) -> f32 {
    let d = b - a;
    let len_sq = d.length_squared();
    if len_sq < f32::EPSILON {
        return p.distance(a);
    }
    let mut t = (p - a).dot(d) / len_sq;
    if !extend_a {
        t = t.max(0.0);
    }
    if !extend_b {
        t = t.min(1.0);
    }
    p.distance(a + d * t)
}

/// Prüft ob ein Punkt innerhalb eines AABB-Rechtecks liegt (inklusiv).
fn point_in_rect(point: Vec2, min: Vec2, max: Vec2) -> bool {
    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
fn point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    let cross = ab.perp_dot(ap).abs();
    if cross > 1e-4 {
        return false;
    }

    let dot = ap.dot(ab);
    if dot < 0.0 {
        return false;
    }

    dot <= ab.length_squared()
}

/// Prüft ob ein Punkt innerhalb eines Polygons liegt (Ray-Casting, inkl. Rand).
fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = polygon[polygon.len() - 1];

    for &current in polygon {
        if point_on_segment(point, previous, current) {
            return true;
        }

        let intersect = ((current.y > point.y) != (previous.y > point.y))
            && (point.x
                < (previous.x - current.x) * (point.y - current.y)
                    / ((previous.y - current.y).max(f32::EPSILON))
                    + current.x);

        if intersect {
            inside = !inside;
        }

        previous = current;
    }

    inside
}
