/// Reel strip image handling
///
/// This module handles:
/// - Reading strip images picked by the user
/// - Decoding them off the UI thread
/// - Exposing natural dimensions for geometry derivation

pub mod loader;

pub use loader::{load_strip, DecodedStrip, LoadError};
