//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! site data is loaded once at startup and never changes, so it is shared
//! behind an `Arc` without locking.

use std::path::PathBuf;
use std::sync::Arc;

use client::state::site::SiteData;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Debug)]
pub struct AppState {
    pub data: Arc<SiteData>,
    pub static_dir: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(data: SiteData, static_dir: PathBuf) -> Self {
        Self { data: Arc::new(data), static_dir }
    }
}
