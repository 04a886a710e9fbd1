//! Folio engine crate.
//!
//! Owns the platform + GPU runtime and the 2D drawing surface that the
//! portfolio's animated layers paint into.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod surface;
