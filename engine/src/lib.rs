//! Rising-tides terrain analysis engine.
//!
//! Pure in-memory queries over a static rectangular elevation grid as sea
//! level rises: flood-fill submersion maps, visible-land accounting, and
//! 8-connected island counting. No I/O, no caching, no shared mutable state.
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod flood;
pub mod islands;
pub mod query;
pub mod terrain;
pub mod union_find;

/// Returns the engine version string from Cargo metadata.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
