//! Shared UI crate for Haven. Components, localization and the preference
//! context live here; the `web` and `desktop` crates only add routing and launch.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod locale_controls;
pub mod newsletter;
pub mod views;

pub mod components {
    // Site footer with registered platform links (components/footer.rs)
    pub mod footer;
    pub use footer::register_footer_links;
    pub use footer::Footer;
    pub use footer::FooterLinks;

    // Search banner (components/hero.rs)
    pub mod hero;
    pub use hero::Hero;

    pub use crate::locale_controls::{ControlsLayout, LanguageCurrencyControls};
    pub use crate::newsletter::Newsletter;
}

/// Shared theme stylesheet (ui/assets/theme/main.css).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
