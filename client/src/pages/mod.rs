//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages render only the main content; the surrounding chrome comes from
//! `components::layout`.

pub mod home;
