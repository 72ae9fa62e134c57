// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles and string lookup.

use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded translation and picks the active locale.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
            bundles.insert(locale.clone(), build_bundle(&locale, source));
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(default_locale);

        tracing::debug!(locale = %current_locale, "selected UI locale");

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

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Looks up a message without arguments.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Looks up a message with named arguments.
    ///
    /// Integer-looking values are passed as Fluent numbers so plural
    /// selectors work.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            match value.parse::<i64>() {
                Ok(number) => fluent_args.set(*name, FluentValue::from(number)),
                Err(_) => fluent_args.set(*name, FluentValue::from(*value)),
            }
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let lookup = |locale: &LanguageIdentifier| -> Option<String> {
            let bundle = self.bundles.get(locale)?;
            let pattern = bundle.get_message(key)?.value()?;
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            errors.is_empty().then(|| value.into_owned())
        };

        lookup(&self.current_locale)
            .or_else(|| lookup(&default_locale()))
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }
}

fn build_bundle(locale: &LanguageIdentifier, source: String) -> FluentBundle<FluentResource> {
    let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
        tracing::warn!(%locale, ?errors, "translation file has syntax errors");
        partial
    });
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Isolation marks would leak into window titles.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, ?errors, "duplicate translation entries");
    }
    bundle
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find_map(|lang| match_available(&lang, available))
}

/// Exact match first, then the first available locale with the same language.
fn match_available(
    lang: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if available.contains(lang) {
        return Some(lang.clone());
    }
    available
        .iter()
        .find(|candidate| candidate.language == lang.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales(list: &[&str]) -> Vec<LanguageIdentifier> {
        list.iter().map(|l| l.parse().unwrap()).collect()
    }

    #[test]
    fn cli_language_wins() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let available = locales(&["en-US", "ja"]);

        let lang = resolve_locale(Some("ja".to_string()), &config, &available);
        assert_eq!(lang, Some("ja".parse().unwrap()));
    }

    #[test]
    fn config_language_is_used_without_cli() {
        let mut config = Config::default();
        config.general.language = Some("ja".to_string());
        let available = locales(&["en-US", "ja"]);

        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("ja".parse().unwrap()));
    }

    #[test]
    fn regional_variant_falls_back_to_language() {
        let available = locales(&["en-US", "ja"]);
        let lang: LanguageIdentifier = "ja-JP".parse().unwrap();
        assert_eq!(match_available(&lang, &available), Some("ja".parse().unwrap()));
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::default();
        assert!(i18n.available_locales().contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales().contains(&"ja".parse().unwrap()));
    }

    #[test]
    fn japanese_labels_match_gallery_wording() {
        let i18n = I18n::new(Some("ja".to_string()), &Config::default());
        assert_eq!(i18n.tr("gallery-title"), "画像ギャラリー");
        assert_eq!(i18n.tr("drop-zone-hint"), "ここに画像をドラッグ＆ドロップ");
        assert_eq!(i18n.tr_with_args("tile-alt", &[("index", "3")]), "画像 3");
    }

    #[test]
    fn plural_arguments_select_variant() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(
            i18n.tr_with_args("notification-add-skipped", &[("count", "1")]),
            "1 file could not be added"
        );
        assert_eq!(
            i18n.tr_with_args("notification-add-skipped", &[("count", "4")]),
            "4 files could not be added"
        );
        assert_eq!(i18n.tr_with_args("window-title", &[("count", "0")]), "IcedGallery");
    }

    #[test]
    fn view_labels_exist_in_every_locale() {
        let keys = [
            "add-images-button",
            "add-images-dialog-title",
            "delete-button",
            "delete-button-tooltip",
            "drop-zone-hint",
            "gallery-title",
            "image-filter-name",
            "notification-dismiss",
            "tile-unavailable",
        ];
        for locale in ["en-US", "ja"] {
            let i18n = I18n::new(Some(locale.to_string()), &Config::default());
            for key in keys {
                assert!(!i18n.tr(key).starts_with("MISSING"), "{locale} lacks {key}");
            }
        }
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }
}
