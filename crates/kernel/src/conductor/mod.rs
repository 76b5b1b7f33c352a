//! Conductor cross-section outlines.
//!
//! A conductor outline is a rectangle whose two right-hand corners are rounded
//! by independently sized arcs. [`assemble::assemble`] builds the unrotated
//! outline from a [`spec::ConductorSpec`]; rotation is applied afterwards as a
//! separate rigid transform so the corner logic never depends on orientation.

pub mod spec;
pub mod error;
pub mod outline;
pub mod assemble;
