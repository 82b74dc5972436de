use dioxus::prelude::*;

use super::state::{ControlsLayout, DropdownState};
use crate::core::config::SiteConfig;
use crate::core::format::format_currency_option;
use crate::core::locale::{Currency, Language};
use crate::core::platform;
use crate::core::preferences::{use_preferences, Preferences};
use crate::t;

#[component]
pub fn LanguageCurrencyControls(#[props(default)] layout: ControlsLayout) -> Element {
    let prefs = use_preferences();
    let dropdowns = use_signal(DropdownState::default);
    let mut near_bottom = use_signal(|| false);
    let threshold = use_hook(|| SiteConfig::current().floating_panel_threshold_px);

    use_future(move || async move {
        if layout != ControlsLayout::Floating {
            return;
        }
        platform::watch_scroll(move |metrics| {
            let visible = metrics.is_near_bottom(threshold);
            if *near_bottom.peek() != visible {
                near_bottom.set(visible);
            }
        })
        .await;
    });

    #[cfg(debug_assertions)]
    tracing::debug!(
        lang = %prefs.language(),
        currency = %prefs.currency(),
        ?layout,
        "LanguageCurrencyControls render"
    );

    match layout {
        ControlsLayout::Floating => render_floating(prefs, near_bottom()),
        ControlsLayout::Dropdowns => render_dropdowns(prefs, dropdowns),
    }
}

fn render_floating(prefs: Preferences, visible: bool) -> Element {
    let current_language = prefs.language();
    let current_currency = prefs.currency();
    let tab_index = if visible { "0" } else { "-1" };

    rsx! {
        div {
            class: format!(
                "locale-controls locale-controls--floating {}",
                if visible { "locale-controls--visible" } else { "locale-controls--hidden" }
            ),
            role: "region",
            aria_label: t!("controls-region"),
            aria_hidden: !visible,

            div { class: "locale-controls__field",
                label { class: "locale-controls__label", r#for: "locale-language",
                    {t!("controls-language")}
                }
                select {
                    id: "locale-language",
                    class: "locale-controls__select",
                    tabindex: tab_index,
                    value: current_language.code(),
                    oninput: move |evt: FormEvent| {
                        if prefs.select_language_code(&evt.value()).is_none() {
                            tracing::warn!(value = %evt.value(), "ignored unknown language code");
                        }
                    },
                    for language in Language::ALL {
                        option {
                            key: "{language.code()}",
                            value: language.code(),
                            selected: language == current_language,
                            "{language.native_name()}"
                        }
                    }
                }
            }

            div { class: "locale-controls__field",
                label { class: "locale-controls__label", r#for: "locale-currency",
                    {t!("controls-currency")}
                }
                select {
                    id: "locale-currency",
                    class: "locale-controls__select",
                    tabindex: tab_index,
                    value: current_currency.code(),
                    oninput: move |evt: FormEvent| {
                        if prefs.select_currency_code(&evt.value()).is_none() {
                            tracing::warn!(value = %evt.value(), "ignored unknown currency code");
                        }
                    },
                    for currency in Currency::ALL {
                        option {
                            key: "{currency.code()}",
                            value: currency.code(),
                            selected: currency == current_currency,
                            "{format_currency_option(currency)}"
                        }
                    }
                }
            }
        }
    }
}

fn render_dropdowns(prefs: Preferences, mut dropdowns: Signal<DropdownState>) -> Element {
    let state = dropdowns();
    let current_language = prefs.language();
    let current_currency = prefs.currency();

    rsx! {
        div { class: "locale-controls locale-controls--dropdowns",
            div { class: "locale-dropdown",
                span { class: "locale-controls__label", {t!("controls-language")} }
                button {
                    r#type: "button",
                    class: "locale-dropdown__toggle",
                    aria_haspopup: "listbox",
                    aria_expanded: state.language_open,
                    onclick: move |_| dropdowns.with_mut(|d| d.toggle_language()),
                    "{current_language.native_name()}"
                }
                if state.language_open {
                    ul { class: "locale-dropdown__menu", role: "listbox",
                        for language in Language::ALL {
                            li { key: "{language.code()}",
                                button {
                                    r#type: "button",
                                    role: "option",
                                    aria_selected: language == current_language,
                                    class: option_class(language == current_language),
                                    onclick: move |_| {
                                        prefs.set_language(language);
                                        dropdowns.with_mut(|d| d.language_chosen());
                                    },
                                    "{language.native_name()}"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "locale-dropdown",
                span { class: "locale-controls__label", {t!("controls-currency")} }
                button {
                    r#type: "button",
                    class: "locale-dropdown__toggle",
                    aria_haspopup: "listbox",
                    aria_expanded: state.currency_open,
                    onclick: move |_| dropdowns.with_mut(|d| d.toggle_currency()),
                    "{format_currency_option(current_currency)}"
                }
                if state.currency_open {
                    ul { class: "locale-dropdown__menu", role: "listbox",
                        for currency in Currency::ALL {
                            li { key: "{currency.code()}",
                                button {
                                    r#type: "button",
                                    role: "option",
                                    aria_selected: currency == current_currency,
                                    class: option_class(currency == current_currency),
                                    onclick: move |_| {
                                        prefs.set_currency(currency);
                                        dropdowns.with_mut(|d| d.currency_chosen());
                                    },
                                    "{format_currency_option(currency)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn option_class(active: bool) -> &'static str {
    if active {
        "locale-dropdown__option locale-dropdown__option--active"
    } else {
        "locale-dropdown__option"
    }
}
