//! Text resolver binding - the key→string lookup the speech core consumes.
//!
//! A resolver is bound to exactly one locale at construction, mirroring how
//! the platform hands out one lookup table per locale change. The core only
//! ever reads it; swapping locales means swapping resolvers.

use std::collections::HashMap;

use tracing::warn;

use crate::error::SynthesisError;

/// Locale-bound localization lookup.
///
/// `resolve` must never be called with an empty key (caller contract); a
/// missing key resolves to `None`, which higher layers treat as "nothing to
/// speak".
pub trait TextResolver: Send + Sync {
    /// The locale identifier this resolver serves (e.g. "en", "hu").
    fn locale(&self) -> &str;

    /// Localized text for `key`, or `None` when the key is absent.
    fn resolve(&self, key: &str) -> Option<&str>;
}

/// Guarded lookup used throughout the core: logs the empty-key contract
/// violation and maps absent keys to the empty string.
pub(crate) fn resolve_text(resolver: &dyn TextResolver, key: &str) -> String {
    if key.is_empty() {
        warn!("{}", SynthesisError::EmptyTextKey);
        return String::new();
    }
    resolver.resolve(key).unwrap_or_default().to_string()
}

/// Map-backed resolver fed from a flat key→string language pack.
///
/// Packs are flat TOML or JSON tables; the built-in packs are embedded in
/// the crate so the core works without any files on disk.
#[derive(Debug, Clone)]
pub struct PackTextResolver {
    locale: String,
    strings: HashMap<String, String>,
}

impl PackTextResolver {
    /// Build a resolver from key/value pairs.
    pub fn from_pairs<K, V>(locale: impl Into<String>, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            locale: locale.into(),
            strings: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a flat `key = "value"` TOML pack.
    ///
    /// Non-string values are skipped; nested tables are flattened with a
    /// `.` separator so grouped packs keep working.
    pub fn from_toml_str(locale: impl Into<String>, source: &str) -> Result<Self, toml::de::Error> {
        let value: toml::Value = toml::from_str(source)?;
        let mut strings = HashMap::new();

        fn walk(prefix: &str, value: &toml::Value, out: &mut HashMap<String, String>) {
            match value {
                toml::Value::String(s) => {
                    out.insert(prefix.to_string(), s.clone());
                }
                toml::Value::Table(table) => {
                    for (key, nested) in table {
                        let key = if prefix.is_empty() {
                            key.clone()
                        } else {
                            format!("{prefix}.{key}")
                        };
                        walk(&key, nested, out);
                    }
                }
                _ => {}
            }
        }

        walk("", &value, &mut strings);
        Ok(Self {
            locale: locale.into(),
            strings,
        })
    }

    /// Parse a flat JSON object pack (string values only).
    pub fn from_json_str(
        locale: impl Into<String>,
        source: &str,
    ) -> Result<Self, serde_json::Error> {
        let map: HashMap<String, serde_json::Value> = serde_json::from_str(source)?;
        let strings = map
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect();
        Ok(Self {
            locale: locale.into(),
            strings,
        })
    }

    /// The language packs shipped with the crate.
    pub fn builtin(locale: &str) -> Option<Self> {
        let source = match locale {
            "en" => include_str!("../../locales/en.toml"),
            "hu" => include_str!("../../locales/hu.toml"),
            "ja" => include_str!("../../locales/ja.toml"),
            _ => return None,
        };
        // Embedded packs are validated by tests; a parse failure here means
        // a broken build, not a runtime condition.
        match Self::from_toml_str(locale, source) {
            Ok(resolver) => Some(resolver),
            Err(error) => {
                warn!(%locale, %error, "embedded language pack failed to parse");
                None
            }
        }
    }

    /// Number of strings in the pack.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the pack holds no strings.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl TextResolver for PackTextResolver {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn resolve(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let resolver = PackTextResolver::from_pairs("en", [("then", "Then"), ("onto", "onto")]);

        assert_eq!(resolver.locale(), "en");
        assert_eq!(resolver.resolve("then"), Some("Then"));
        assert_eq!(resolver.resolve("missing"), None);
    }

    #[test]
    fn test_from_toml() {
        let resolver = PackTextResolver::from_toml_str(
            "en",
            "then = \"Then\"\nonto = \"onto\"\n\n[camera]\nunknown = \"Speed camera ahead.\"\n",
        )
        .unwrap();

        assert_eq!(resolver.resolve("then"), Some("Then"));
        assert_eq!(resolver.resolve("camera.unknown"), Some("Speed camera ahead."));
    }

    #[test]
    fn test_from_json() {
        let resolver = PackTextResolver::from_json_str(
            "en",
            r#"{"then": "Then", "count": 3, "onto": "onto"}"#,
        )
        .unwrap();

        assert_eq!(resolver.resolve("then"), Some("Then"));
        assert_eq!(resolver.resolve("onto"), Some("onto"));
        // Non-string values are skipped, not errors.
        assert_eq!(resolver.resolve("count"), None);
    }

    #[test]
    fn test_builtin_packs_parse() {
        for locale in ["en", "hu", "ja"] {
            let resolver = PackTextResolver::builtin(locale).unwrap();
            assert_eq!(resolver.locale(), locale);
            assert!(!resolver.is_empty());
            assert!(resolver.resolve("then").is_some());
        }
        assert!(PackTextResolver::builtin("xx").is_none());
    }

    #[test]
    fn test_guarded_lookup() {
        let resolver = PackTextResolver::from_pairs("en", [("then", "Then")]);

        assert_eq!(resolve_text(&resolver, "then"), "Then");
        assert_eq!(resolve_text(&resolver, "missing"), "");
        assert_eq!(resolve_text(&resolver, ""), "");
    }
}
