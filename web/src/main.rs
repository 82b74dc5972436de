use dioxus::prelude::*;

use ui::components::{register_footer_links, Footer, FooterLinks};
use ui::core::preferences::use_preferences_provider;
use ui::core::sections::SiteSection;
use ui::views::{Home, SectionPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
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

const FAVICON: Asset = asset!("/assets/favicon.svg");

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

fn main() {
    dioxus::launch(App);
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

    // Shared language/currency; the footer controls write to it and every
    // view that calls `t!` reads it.
    let prefs = use_preferences_provider();
    tracing::debug!(lang = %prefs.language(), "App render");

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        Router::<Route> {}
    }
}

/// Routed content above the shared footer.
#[component]
fn WebLayout() -> Element {
    rsx! {
        main { Outlet::<Route> {} }
        Footer {}
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
