use dioxus::prelude::*;

use super::client::SubscribeClient;
use super::form::NewsletterForm;
use crate::core::config::SiteConfig;
use crate::core::preferences::use_preferences;
use crate::t;

#[component]
pub fn Newsletter() -> Element {
    let language = use_preferences().language();
    let mut form = use_signal(NewsletterForm::default);
    let client = use_hook(|| SubscribeClient::from_config(&SiteConfig::current()));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(email) = form.with_mut(|f| f.begin_submit()) else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.subscribe(&email).await;
            form.with_mut(|f| f.finish(result));
        });
    };

    let snapshot = form();
    let submit_label = if snapshot.loading {
        t!("newsletter-submitting")
    } else {
        t!("newsletter-submit")
    };

    rsx! {
        section { class: "newsletter", lang: language.code(),
            h3 { class: "newsletter__title", {t!("newsletter-title")} }
            p { class: "newsletter__body", {t!("newsletter-body")} }

            form { class: "newsletter__form", onsubmit: on_submit,
                label {
                    class: "visually-hidden",
                    r#for: "newsletter-email",
                    {t!("newsletter-email-label")}
                }
                input {
                    id: "newsletter-email",
                    class: "newsletter__input",
                    r#type: "email",
                    required: true,
                    placeholder: t!("newsletter-email-placeholder"),
                    value: "{snapshot.email}",
                    disabled: snapshot.loading,
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.edit(evt.value())),
                }
                button {
                    r#type: "submit",
                    class: "button button--primary newsletter__submit",
                    disabled: snapshot.loading,
                    "{submit_label}"
                }
            }

            if let Some(message) = snapshot.message.as_ref() {
                p { class: message.css_class(), role: "status", {message.text()} }
            }
        }
    }
}
