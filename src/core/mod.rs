//! Core-Domänentypen: logische Punkte und die Zeit/Preis↔Pixel-Abbildung.

pub mod point;
pub mod view;

pub use point::LogicalPoint;
pub use view::{ChartScale, ChartView};
