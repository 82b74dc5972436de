#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config, LogicalSize};
use dioxus::prelude::*;

use ui::components::{register_footer_links, ControlsLayout, Footer, FooterLinks};
use ui::core::preferences::use_preferences_provider;
use ui::core::sections::SiteSection;
use ui::views::{Home, SectionPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Home {},
    #[route("/listings")]
    Listings {},
    #[route("/vip-access")]
    VipAccess {},
    #[route("/bitcoin")]
    Bitcoin {},
    #[route("/contact")]
    Contact {},
    #[route("/policy")]
    Policy {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css), always inlined on desktop.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Haven Estates – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1280.0, 860.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn link_listings(label: &str) -> Element {
    rsx!(Link { class: "footer__link", to: Route::Listings {}, "{label}" })
}
fn link_vip_access(label: &str) -> Element {
    rsx!(Link { class: "footer__link", to: Route::VipAccess {}, "{label}" })
}
fn link_bitcoin(label: &str) -> Element {
    rsx!(Link { class: "footer__link", to: Route::Bitcoin {}, "{label}" })
}
fn link_contact(label: &str) -> Element {
    rsx!(Link { class: "footer__link", to: Route::Contact {}, "{label}" })
}
fn link_policy(label: &str) -> Element {
    rsx!(Link { class: "footer__link", to: Route::Policy {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_footer_links(FooterLinks {
        listings: link_listings,
        vip_access: link_vip_access,
        bitcoin: link_bitcoin,
        contact: link_contact,
        policy: link_policy,
    });

    let prefs = use_preferences_provider();
    tracing::debug!(lang = %prefs.language(), "App render");

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop windows rarely scroll far enough for the floating panel, so the
/// footer uses the inline dropdowns instead.
#[component]
fn DesktopLayout() -> Element {
    rsx! {
        main { Outlet::<Route> {} }
        Footer { controls: ControlsLayout::Dropdowns }
    }
}

#[component]
fn Listings() -> Element {
    rsx!(SectionPage { section: SiteSection::Listings })
}

#[component]
fn VipAccess() -> Element {
    rsx!(SectionPage { section: SiteSection::VipAccess })
}

#[component]
fn Bitcoin() -> Element {
    rsx!(SectionPage { section: SiteSection::Bitcoin })
}

#[component]
fn Contact() -> Element {
    rsx!(SectionPage { section: SiteSection::Contact })
}

#[component]
fn Policy() -> Element {
    rsx!(SectionPage { section: SiteSection::Policy })
}
