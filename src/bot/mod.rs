/// Command, text and callback handlers
pub mod handlers;
/// Movie card delivery with text fallback
pub mod messaging;
/// User state and dialogue management
pub mod state;
/// Keyboards and fixed texts
pub mod views;
