//! Geteilte Konfiguration für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen und Konstanten, die `tools`, `render`
//! und `app` gemeinsam nutzen, um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::ToolDefaults;
pub use options::{HANDLE_HIT_RADIUS_PX, LINE_HIT_TOLERANCE_PX};
