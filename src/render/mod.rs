//! Frame-Darstellung: Shape-Primitive und pro Frame komponierte Views.
//!
//! Dieses Modul malt nichts — es komponiert hit-testbare Shapes mit
//! Stil-Daten, die der Host in Einfüge-Reihenfolge zeichnet. Hit-Tests
//! beantwortet die `PaneView` in umgekehrter Reihenfolge.

pub mod pane_view;
pub mod shapes;

pub use pane_view::{PaneView, ShapeEntry};
pub use shapes::{CursorKind, HitResult, HitTarget, PaintStyle, Shape};
