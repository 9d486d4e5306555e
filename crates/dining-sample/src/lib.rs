//! # Dining Sample
//!
//! The presentation side of the dining-core protocol: a console sink in
//! place of a graphical display, and the process wiring in `main`
//! (tracing setup, Ctrl-C → cooperative stop).
//!
//! Exposed as a library so integration tests can drive the same wiring.

pub mod sink;

pub use sink::ConsoleSink;
