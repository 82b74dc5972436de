use std::collections::{BTreeMap, BTreeSet};

/// Locale parity checks for the embedded Fluent bundles.
///
/// Every non-fallback locale must define exactly the messages of the fallback
/// (en-US) `haven-ui.ftl`, each referencing the same `{ $variables }`, so a
/// `t!("footer-copyright", year = ..)` call formats in every language.
///
/// Register a new locale in `LOCALES` after creating `ui/i18n/<locale>/haven-ui.ftl`.
const FALLBACK: (&str, &str) = ("en-US", include_str!("../i18n/en-US/haven-ui.ftl"));

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/haven-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/haven-ui.ftl")),
];

/// Message id → set of variable names used in its value.
///
/// Only single-line messages are understood, which is all the bundles use.
fn messages(src: &str, locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for (lineno, raw) in src.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') || line.starts_with('-') {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            continue;
        }
        if out.insert(id.to_string(), variables(value)).is_some() {
            panic!("{locale}: duplicate message `{id}` (line {})", lineno + 1);
        }
    }
    out
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

#[test]
fn fallback_has_messages() {
    let (locale, src) = FALLBACK;
    assert!(
        !messages(src, locale).is_empty(),
        "Fallback ({locale}) contains no messages."
    );
}

#[test]
fn all_locales_match_fallback() {
    let fallback = messages(FALLBACK.1, FALLBACK.0);
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        let translated = messages(src, locale);

        let missing: Vec<_> = fallback
            .keys()
            .filter(|id| !translated.contains_key(*id))
            .cloned()
            .collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing:\n  {}", missing.join("\n  ")));
        }

        let extra: Vec<_> = translated
            .keys()
            .filter(|id| !fallback.contains_key(*id))
            .cloned()
            .collect();
        if !extra.is_empty() {
            failures.push(format!("{locale} defines unknown ids:\n  {}", extra.join("\n  ")));
        }

        for (id, vars) in &fallback {
            if let Some(translated_vars) = translated.get(id) {
                if translated_vars != vars {
                    failures.push(format!(
                        "{locale}: `{id}` uses variables {translated_vars:?}, fallback uses {vars:?}"
                    ));
                }
            }
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation parity check failed:\n\n{}\n\nHint: copy the ids from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn variable_extraction() {
    assert_eq!(
        variables(" © { $year } Haven Estates."),
        BTreeSet::from(["year".to_string()])
    );
    assert!(variables(" Quick Links").is_empty());
}
