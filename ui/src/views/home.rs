use dioxus::prelude::*;

use crate::components::Hero;
use crate::core::preferences::use_preferences;

#[component]
pub fn Home() -> Element {
    // Subscribe to the shared language so the page re-renders on change.
    let lang_marker = use_preferences().language();

    #[cfg(debug_assertions)]
    tracing::debug!(lang = %lang_marker, "Home render");

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        Hero {}
        section { class: "page page-home",
            h2 { {crate::t!("home-featured-title")} }
            p { {crate::t!("home-featured-body")} }
        }
    }
}
