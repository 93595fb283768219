//! Layout state: resolved site input and the reactive theme phase.
//!
//! DESIGN
//! ======
//! `site` is immutable render input; `theme` is the only piece of state that
//! changes after mount.

pub mod site;
pub mod theme;
