// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = filename, "skipping translation with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            match load_bundle(&locale, String::from_utf8_lossy(content.data.as_ref()).to_string()) {
                Some(bundle) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                None => tracing::warn!(file = filename, "skipping unparsable translation file"),
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);
        tracing::debug!(locale = %current_locale, "selected UI language");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, interpolating named arguments such as `{ $field }`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
                tracing::debug!(key, ?errors, "translation formatting failed");
            }
        }
        format!("MISSING: {}", key)
    }
}

fn load_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source).ok()?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Unicode isolation marks render as boxes in the toast font.
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).ok()?;
    Some(bundle)
}

fn parse_available(lang: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    lang.parse::<LanguageIdentifier>()
        .ok()
        .filter(|lang| available.contains(lang))
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    cli_lang
        .as_deref()
        .and_then(|lang| parse_available(lang, available))
        .or_else(|| {
            config
                .general
                .language
                .as_deref()
                .and_then(|lang| parse_available(lang, available))
        })
        .or_else(|| sys_locale::get_locale().and_then(|lang| parse_available(&lang, available)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::LanguageIdentifier;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn command_line_beats_settings() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_languages_fall_through_to_settings() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        for cli in [None, Some("xx-YY".to_string()), Some("not a tag".to_string())] {
            let lang = resolve_locale(cli, &config, &available());
            assert_eq!(lang, Some("fr".parse().unwrap()));
        }
    }

    #[test]
    fn system_locale_is_only_used_when_translated() {
        let lang = resolve_locale(None, &Config::default(), &available());
        if let Some(l) = lang {
            assert!(available().contains(&l));
        }
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
        assert_eq!(i18n.current_locale(), &"en-US".parse::<LanguageIdentifier>().unwrap());
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_interpolated() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let text = i18n.tr_with_args("notification-contact-message-too-short", &[("min", "10")]);
        assert!(text.contains("10"), "{text}");
        assert!(!text.contains('\u{2068}'));
    }

    #[test]
    fn french_translation_differs() {
        let config = Config::default();
        let en = I18n::new(Some("en-US".into()), &config);
        let fr = I18n::new(Some("fr".into()), &config);
        assert_ne!(en.tr("nav-about"), fr.tr("nav-about"));
    }

    #[test]
    fn icon_button_tooltips_are_translated() {
        let config = Config::default();
        for lang in ["en-US", "fr"] {
            let i18n = I18n::new(Some(lang.into()), &config);
            for key in ["modal-close", "nav-menu-toggle", "notification-dismiss"] {
                assert!(!i18n.tr(key).starts_with("MISSING"), "{lang}: {key}");
            }
        }
    }
}
