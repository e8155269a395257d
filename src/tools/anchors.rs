//! Anker-Virtualisierung: Handle-Index ↔ persistierte Punkte.
//!
//! Jeder Tool-Typ hat eine statische Formel-Tabelle `Handle-Index →
//! HandleFormula`. Indizes unterhalb des Punkt-Budgets sind immer
//! Durchgriffe auf den Speicher; höhere Indizes sind reine Funktionen der
//! aktuellen Punkte (Ecken, Kantenmitten, Mittelpunkt). Schreibzugriffe
//! auf abgeleitete Handles landen auf genau den persistierten
//! Koordinaten, von denen die Formel abhängt.

use super::ToolKind;
use crate::core::LogicalPoint;

/// Kante eines Zwei-Punkt-Rechtecks (Bounding-Geometrie).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Frühester Zeitstempel (linke Kante)
    Left,
    /// Spätester Zeitstempel (rechte Kante)
    Right,
    /// Höchster Preis (obere Kante)
    Top,
    /// Niedrigster Preis (untere Kante)
    Bottom,
}

/// Formel eines interaktiven Handles.
///
/// Als Daten statt Methoden-Override gehalten, damit die Abbildung ohne
/// Rendering testbar bleibt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleFormula {
    /// Durchgriff auf den persistierten Punkt `i`
    Stored(usize),
    /// Gegenüberliegende Ecke: Zeit von Punkt `time_of`, Preis von Punkt `price_of`
    OppositeCorner {
        /// Index des Punkts, der die Zeit liefert
        time_of: usize,
        /// Index des Punkts, der den Preis liefert
        price_of: usize,
    },
    /// Kantenmitte der Bounding-Geometrie
    EdgeMidpoint(Edge),
    /// Mittelpunkt der ersten beiden Punkte; Schreiben verschiebt beide
    Midpoint,
}

// ── Formel-Tabellen ──────────────────────────────────────────────

/// Rechteck: 2 persistierte Ecken → 8 Handles.
/// 0-1 gespeichert, 2-3 Gegen-Ecken, 4 Mitte-links, 5 Mitte-rechts,
/// 6 Mitte-oben, 7 Mitte-unten.
const RECTANGLE_HANDLES: [HandleFormula; 8] = [
    HandleFormula::Stored(0),
    HandleFormula::Stored(1),
    HandleFormula::OppositeCorner {
        time_of: 0,
        price_of: 1,
    },
    HandleFormula::OppositeCorner {
        time_of: 1,
        price_of: 0,
    },
    HandleFormula::EdgeMidpoint(Edge::Left),
    HandleFormula::EdgeMidpoint(Edge::Right),
    HandleFormula::EdgeMidpoint(Edge::Top),
    HandleFormula::EdgeMidpoint(Edge::Bottom),
];

/// Zwei-Punkt-Linie mit Verschiebe-Handle in der Mitte.
const LINE_HANDLES: [HandleFormula; 3] = [
    HandleFormula::Stored(0),
    HandleFormula::Stored(1),
    HandleFormula::Midpoint,
];

/// Nur gespeicherte Punkte (ein Handle pro Punkt).
const STORED_1: [HandleFormula; 1] = [HandleFormula::Stored(0)];
const STORED_2: [HandleFormula; 2] = [HandleFormula::Stored(0), HandleFormula::Stored(1)];
const STORED_3: [HandleFormula; 3] = [
    HandleFormula::Stored(0),
    HandleFormula::Stored(1),
    HandleFormula::Stored(2),
];
const STORED_6: [HandleFormula; 6] = [
    HandleFormula::Stored(0),
    HandleFormula::Stored(1),
    HandleFormula::Stored(2),
    HandleFormula::Stored(3),
    HandleFormula::Stored(4),
    HandleFormula::Stored(5),
];

/// Formel-Tabelle eines Tool-Typs (Index = Handle-Index).
pub fn handle_table(kind: ToolKind) -> &'static [HandleFormula] {
    match kind {
        ToolKind::TrendLine | ToolKind::DateRange | ToolKind::PriceRange => &LINE_HANDLES,
        ToolKind::HorizontalLine | ToolKind::VerticalLine | ToolKind::CrossLine => &STORED_1,
        ToolKind::Rectangle => &RECTANGLE_HANDLES,
        ToolKind::Callout => &STORED_2,
        ToolKind::ElliottWave => &STORED_6,
        ToolKind::FibExtension => &STORED_3,
    }
}

// ── Lesen ────────────────────────────────────────────────────────

/// Wertet eine Handle-Formel über den aktuellen Punkten aus.
///
/// Abgeleitete Formeln brauchen mindestens zwei Punkte; sonst `None`
/// (Tool noch nicht interagierbar).
pub fn resolve(points: &[LogicalPoint], formula: HandleFormula) -> Option<LogicalPoint> {
    match formula {
        HandleFormula::Stored(i) => points.get(i).copied(),
        HandleFormula::OppositeCorner { time_of, price_of } => {
            let t = points.get(time_of)?.timestamp;
            let p = points.get(price_of)?.price;
            Some(LogicalPoint::new(t, p))
        }
        HandleFormula::EdgeMidpoint(edge) => {
            let (a, b) = first_two(points)?;
            let mid = LogicalPoint::midpoint(a, b);
            Some(match edge {
                Edge::Left => LogicalPoint::new(a.timestamp.min(b.timestamp), mid.price),
                Edge::Right => LogicalPoint::new(a.timestamp.max(b.timestamp), mid.price),
                Edge::Top => LogicalPoint::new(mid.timestamp, a.price.max(b.price)),
                Edge::Bottom => LogicalPoint::new(mid.timestamp, a.price.min(b.price)),
            })
        }
        HandleFormula::Midpoint => {
            let (a, b) = first_two(points)?;
            Some(LogicalPoint::midpoint(a, b))
        }
    }
}

// ── Schreiben ────────────────────────────────────────────────────

/// Schreibt einen Handle-Edit zurück auf die persistierten Punkte.
///
/// Kantenmitten ändern genau eine Koordinate genau eines Punkts: die
/// linke Kante den Zeitstempel des Punkts mit minimaler Zeit, die obere
/// Kante den Preis des Punkts mit maximalem Preis. Bei Gleichstand
/// gewinnt der niedrigere Index (deterministisch). Der Mittelpunkt
/// verschiebt beide Punkte um das Delta.
pub fn apply(points: &mut [LogicalPoint], formula: HandleFormula, new_point: LogicalPoint) {
    match formula {
        HandleFormula::Stored(i) => {
            if let Some(slot) = points.get_mut(i) {
                *slot = new_point;
            }
        }
        HandleFormula::OppositeCorner { time_of, price_of } => {
            if time_of >= points.len() || price_of >= points.len() {
                return;
            }
            points[time_of].timestamp = new_point.timestamp;
            points[price_of].price = new_point.price;
        }
        HandleFormula::EdgeMidpoint(edge) => {
            if points.len() < 2 {
                return;
            }
            match edge {
                Edge::Left => {
                    let i = extreme_index(points, |p| p.timestamp, false);
                    points[i].timestamp = new_point.timestamp;
                }
                Edge::Right => {
                    let i = extreme_index(points, |p| p.timestamp, true);
                    points[i].timestamp = new_point.timestamp;
                }
                Edge::Top => {
                    let i = extreme_index(points, |p| p.price, true);
                    points[i].price = new_point.price;
                }
                Edge::Bottom => {
                    let i = extreme_index(points, |p| p.price, false);
                    points[i].price = new_point.price;
                }
            }
        }
        HandleFormula::Midpoint => {
            let Some((a, b)) = first_two(points) else {
                return;
            };
            let mid = LogicalPoint::midpoint(a, b);
            let dt = new_point.timestamp - mid.timestamp;
            let dp = new_point.price - mid.price;
            for p in points.iter_mut().take(2) {
                p.timestamp += dt;
                p.price += dp;
            }
        }
    }
}

fn first_two(points: &[LogicalPoint]) -> Option<(LogicalPoint, LogicalPoint)> {
    match points {
        [a, b, ..] => Some((*a, *b)),
        _ => None,
    }
}

/// Index des Punkts mit extremalem Wert; Gleichstand → niedrigerer Index.
fn extreme_index(points: &[LogicalPoint], key: fn(&LogicalPoint) -> f64, max: bool) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let better = if max {
            key(p) > key(&points[best])
        } else {
            key(p) < key(&points[best])
        };
        if better {
            best = i;
        }
    }
    best
}
