//! Event types and observers used by the editor.
//!
//! Submodules:
//! - [`edit`] – per-frame paint/erase commands queued by input handling
//! - [`level`] – save/load requests and the observers running the file I/O
//! - [`screenshot`] – screenshot requests
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod edit;
pub mod level;
pub mod screenshot;
pub mod switchdebug;
