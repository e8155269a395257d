//! Sicht-Abbildung: Zeit/Preis ↔ Pane-Pixel für den aktuellen Chart-Ausschnitt.

use super::point::LogicalPoint;
use glam::Vec2;

/// Host-Vertrag: Abbildung zwischen Chart-Raum und Pane-Pixeln.
///
/// Die Charting-Engine liefert die Skalen (ggf. nicht-linear, zoom-abhängig);
/// `ChartView` ist die mitgelieferte lineare Referenz-Implementierung.
/// Nicht darstellbare Eingaben (NaN/Inf, leerer Bereich) ergeben `None` —
/// der Aufrufer behandelt den Punkt dann als "ohne Bildschirmposition"
/// und überspringt das Tool für diesen Frame.
pub trait ChartScale {
    /// Zeitstempel → Pixel-X (darf außerhalb des Pane liegen).
    fn time_to_pixel(&self, timestamp: f64) -> Option<f32>;

    /// Preis → Pixel-Y. Y wächst nach unten: der obere Pane-Rand
    /// entspricht dem höchsten sichtbaren Preis.
    fn price_to_pixel(&self, price: f64) -> Option<f32>;

    /// Pixel-X → Zeitstempel.
    fn pixel_to_time(&self, x: f32) -> Option<f64>;

    /// Pixel-Y → Preis.
    fn pixel_to_price(&self, y: f32) -> Option<f64>;

    /// Pane-Größe in Pixeln [Breite, Höhe].
    fn pane_size(&self) -> [f32; 2];

    /// Konvertiert einen logischen Punkt in Pane-Pixel.
    fn point_to_pixel(&self, point: LogicalPoint) -> Option<Vec2> {
        let x = self.time_to_pixel(point.timestamp)?;
        let y = self.price_to_pixel(point.price)?;
        Some(Vec2::new(x, y))
    }

    /// Konvertiert Pane-Pixel in einen logischen Punkt.
    fn pixel_to_point(&self, px: Vec2) -> Option<LogicalPoint> {
        let timestamp = self.pixel_to_time(px.x)?;
        let price = self.pixel_to_price(px.y)?;
        Some(LogicalPoint::new(timestamp, price))
    }
}

/// Linearer Chart-Ausschnitt: sichtbarer Zeit-/Preis-Bereich + Pane-Größe.
#[derive(Debug, Clone)]
pub struct ChartView {
    /// Frühester sichtbarer Zeitstempel
    pub time_min: f64,
    /// Spätester sichtbarer Zeitstempel
    pub time_max: f64,
    /// Niedrigster sichtbarer Preis
    pub price_min: f64,
    /// Höchster sichtbarer Preis
    pub price_max: f64,
    /// Pane-Größe in Pixeln [Breite, Höhe]
    pub pane_size: [f32; 2],
}

impl ChartView {
    /// Erstellt einen neuen Ausschnitt.
    pub fn new(
        time_min: f64,
        time_max: f64,
        price_min: f64,
        price_max: f64,
        pane_size: [f32; 2],
    ) -> Self {
        Self {
            time_min,
            time_max,
            price_min,
            price_max,
            pane_size,
        }
    }

    /// Sind beide Bereiche nicht-degeneriert und die Pane-Größe positiv?
    fn is_mappable(&self) -> bool {
        self.time_max > self.time_min
            && self.price_max > self.price_min
            && self.time_min.is_finite()
            && self.time_max.is_finite()
            && self.price_min.is_finite()
            && self.price_max.is_finite()
            && self.pane_size[0] > 0.0
            && self.pane_size[1] > 0.0
    }
}

impl ChartScale for ChartView {
    fn time_to_pixel(&self, timestamp: f64) -> Option<f32> {
        if !self.is_mappable() || !timestamp.is_finite() {
            return None;
        }
        let t = (timestamp - self.time_min) / (self.time_max - self.time_min);
        Some((t * f64::from(self.pane_size[0])) as f32)
    }

    fn price_to_pixel(&self, price: f64) -> Option<f32> {
        if !self.is_mappable() || !price.is_finite() {
            return None;
        }
        let t = (self.price_max - price) / (self.price_max - self.price_min);
        Some((t * f64::from(self.pane_size[1])) as f32)
    }

    fn pixel_to_time(&self, x: f32) -> Option<f64> {
        if !self.is_mappable() || !x.is_finite() {
            return None;
        }
        let t = f64::from(x) / f64::from(self.pane_size[0]);
        Some(self.time_min + t * (self.time_max - self.time_min))
    }

    fn pixel_to_price(&self, y: f32) -> Option<f64> {
        if !self.is_mappable() || !y.is_finite() {
            return None;
        }
        let t = f64::from(y) / f64::from(self.pane_size[1]);
        Some(self.price_max - t * (self.price_max - self.price_min))
    }

    fn pane_size(&self) -> [f32; 2] {
        self.pane_size
    }
}
