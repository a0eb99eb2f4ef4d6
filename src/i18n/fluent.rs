// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
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
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the translation bundles and picks the active locale.
    ///
    /// Embedded `.ftl` files are always loaded. When `i18n_dir` points at a
    /// directory, its `<locale>.ftl` files are layered on top: their messages
    /// replace embedded ones with the same id, every other embedded message
    /// stays available, and unknown locales are added.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: HashMap<LanguageIdentifier, Vec<String>> = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale) = locale_from_filename(filename) {
                if let Some(content) = Asset::get(filename) {
                    sources
                        .entry(locale)
                        .or_default()
                        .push(String::from_utf8_lossy(content.data.as_ref()).into());
                }
            }
        }

        if let Some(dir) = i18n_dir {
            for (locale, source) in read_ftl_dir(Path::new(&dir)) {
                sources.entry(locale).or_default().push(source);
            }
        }

        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();
        for (locale, layers) in sources {
            if let Some(bundle) = build_bundle(&locale, layers) {
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

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

    /// Translates `key`, substituting `{ $name }` placeables from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename
        .strip_suffix(".ftl")
        .and_then(|locale| locale.parse::<LanguageIdentifier>().ok())
}

fn read_ftl_dir(dir: &Path) -> Vec<(LanguageIdentifier, String)> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let locale = locale_from_filename(&name)?;
            let content = fs::read_to_string(entry.path()).ok()?;
            Some((locale, content))
        })
        .collect()
}

/// Builds one locale's bundle from its layers, later layers winning.
///
/// Files with syntax errors are skipped rather than partially loaded. Returns
/// `None` when no layer parsed.
fn build_bundle(
    locale: &LanguageIdentifier,
    layers: Vec<String>,
) -> Option<FluentBundle<FluentResource>> {
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Isolation marks around placeables render as stray glyphs in Iced text.
    bundle.set_use_isolating(false);

    let mut loaded = false;
    for source in layers {
        let Ok(resource) = FluentResource::try_new(source) else {
            continue;
        };
        bundle.add_resource_overriding(resource);
        loaded = true;
    }
    loaded.then_some(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn locales() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr".to_string()), &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_ignores_unavailable_cli_lang() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("xx".to_string()), &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn embedded_locales_are_available() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        let names: Vec<String> = i18n
            .available_locales
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(names.contains(&"en-US".to_string()));
        assert!(names.contains(&"fr".to_string()));
    }

    #[test]
    fn tr_returns_english_title() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert_eq!(i18n.tr("window-title"), "Avatar Gallery");
    }

    #[test]
    fn tr_with_args_substitutes_placeables() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        let text = i18n.tr_with_args("notification-download-saved", &[("file", "bo.png")]);
        assert!(text.contains("bo.png"), "{text}");
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn i18n_dir_overrides_embedded_strings() {
        let dir = tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("en-US.ftl"), "window-title = Custom Title\n")
            .expect("write ftl");

        let i18n = I18n::new(
            Some("en-US".to_string()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert_eq!(i18n.tr("window-title"), "Custom Title");
    }

    #[test]
    fn partial_override_keeps_other_embedded_strings() {
        let dir = tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("fr.ftl"), "window-title = Galerie perso\n")
            .expect("write ftl");
        let embedded = I18n::new(Some("fr".to_string()), None, &Config::default());

        let i18n = I18n::new(
            Some("fr".to_string()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert_eq!(i18n.tr("window-title"), "Galerie perso");
        assert_eq!(i18n.tr("tile-copy-tooltip"), embedded.tr("tile-copy-tooltip"));
        assert!(!i18n.tr("gallery-description").starts_with("MISSING"));
    }

    #[test]
    fn broken_override_falls_back_to_embedded() {
        let dir = tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("en-US.ftl"), "window-title = { broken\n")
            .expect("write ftl");

        let i18n = I18n::new(
            Some("en-US".to_string()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert_eq!(i18n.tr("window-title"), "Avatar Gallery");
    }

    #[test]
    fn override_dir_can_add_a_locale() {
        let dir = tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("de.ftl"), "window-title = Avatar-Galerie\n")
            .expect("write ftl");

        let i18n = I18n::new(
            Some("de".to_string()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert_eq!(i18n.current_locale().to_string(), "de");
        assert_eq!(i18n.tr("window-title"), "Avatar-Galerie");
    }
}
