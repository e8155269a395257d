//! Anwendungs-Schicht: Tool-Sammlung, Frame-Aufbau, Gesten-Controller.

pub mod collection;
pub mod frame;
pub mod interaction;

pub use collection::{ToolCollection, ToolId};
pub use frame::Frame;
pub use interaction::InteractionController;
