//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome from the `SiteData` context; only the
//! theme switch and the theme-dependent icons hold reactive state.

pub mod dark_mode_toggle;
pub mod layout;
pub mod navigation;
pub mod site_footer;
pub mod site_header;
pub mod social_links;
