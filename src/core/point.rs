//! Logische Chart-Punkte: Zeitstempel + Preis.

use serde::{Deserialize, Serialize};

/// Logischer Punkt im Chart-Raum: Zeitstempel + Preis.
///
/// Die einzige persistierte Geometrie-Repräsentation. Alle virtuellen
/// Handles werden aus diesen Punkten abgeleitet und nie gespeichert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogicalPoint {
    /// Zeitstempel auf der Chart-Zeitachse (Sekunden)
    pub timestamp: f64,
    /// Preis auf der Chart-Preisachse
    pub price: f64,
}

impl LogicalPoint {
    /// Erstellt einen neuen logischen Punkt.
    pub fn new(timestamp: f64, price: f64) -> Self {
        Self { timestamp, price }
    }

    /// Sind beide Koordinaten endlich (kein NaN/Inf)?
    pub fn is_finite(&self) -> bool {
        self.timestamp.is_finite() && self.price.is_finite()
    }

    /// Punktweiser Mittelwert zweier logischer Punkte.
    pub fn midpoint(a: LogicalPoint, b: LogicalPoint) -> LogicalPoint {
        LogicalPoint::new(
            (a.timestamp + b.timestamp) / 2.0,
            (a.price + b.price) / 2.0,
        )
    }
}
