//! antei-exercises
//!
//! Static exercise catalog and the deterministic selection policy driven
//! by the computed risk tiers. Pure data — no I/O.

pub mod catalog;
pub mod select;
