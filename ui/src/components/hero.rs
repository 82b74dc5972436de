use crate::core::preferences::use_preferences;
use crate::t;
use dioxus::prelude::*;

const HERO_IMAGE: Asset = asset!("/assets/images/hero-skyline.svg");

/// Landing banner. The search box is uncontrolled and the button has no handler.
#[component]
pub fn Hero() -> Element {
    // No props, so only this read re-renders the banner on a language switch.
    let language = use_preferences().language();

    rsx! {
        section { id: "hero", class: "hero", lang: language.code(),
            img {
                class: "hero__image",
                src: HERO_IMAGE,
                alt: t!("hero-image-alt"),
            }
            div { class: "hero__overlay",
                h1 { class: "hero__title", {t!("hero-title")} }
                p { class: "hero__subtitle", {t!("hero-subtitle")} }
                div { class: "hero__search", role: "search",
                    input {
                        class: "hero__input",
                        r#type: "text",
                        name: "q",
                        aria_label: t!("hero-search-placeholder"),
                        placeholder: t!("hero-search-placeholder"),
                    }
                    button { r#type: "button", class: "button button--accent hero__button",
                        {t!("hero-search")}
                    }
                }
            }
        }
    }
}
