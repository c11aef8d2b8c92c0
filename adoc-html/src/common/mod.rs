//! Format-agnostic rendering logic.
//!
//! Anything here is independent of the output markup: the running
//! attribute-substitution context, section title numbering, and media target
//! resolution. Output backends stay focused on producing their own markup
//! shapes on top of this core.

pub mod media;
pub mod subs;
pub mod titles;
