//! Chart-Line-Tools.
//! Geometrie- und Interaktions-Layer für Zeichenwerkzeuge ("Line-Tools")
//! auf Preis/Zeit-Charts: Rechtecke, Trendlinien-Varianten, Datums-Bereiche,
//! Elliott-Wellen, Fibonacci-Extensions.
//!
//! Die Pixel-Darstellung selbst (Malen, Frame-Scheduling) liegt beim Host;
//! diese Library liefert Anker-Virtualisierung, Shift-Drag-Constraints,
//! Viewport-Culling und die Hit-Test-Delegation an die pro Frame
//! komponierten Shapes.

pub mod app;
pub mod core;
pub mod json;
pub mod render;
pub mod shared;
pub mod tools;

pub use app::{Frame, InteractionController, ToolCollection, ToolId};
pub use core::{ChartScale, ChartView, LogicalPoint};
pub use json::{export_tools, import_tools};
pub use render::{CursorKind, HitResult, HitTarget, PaintStyle, PaneView, Shape, ShapeEntry};
pub use shared::ToolDefaults;
pub use tools::{
    CapStyle, Constrained, CreationAction, CullingState, DragPhase, ExtendFlags, FibLevel,
    LineTool, SnapAxis, ToolKind, ToolOptions, ToolRegistry, WavePattern,
};
