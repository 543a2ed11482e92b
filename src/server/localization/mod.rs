//! Message catalogs and per-request translation.
//!
//! Language files live in one directory, one flat JSON object per language named after
//! its tag (`en.json`, `tr.json`). A [`Translator`] is built for every response from the
//! client's `Accept-Language` header and resolves message keys in preference order,
//! falling back from regional tags to their base language and finally to the default
//! language.

pub mod language;

use std::{collections::HashMap, fs, path::Path};

use crate::server::error::localization::LocalizationError;

/// Language used when the client expresses no usable preference.
pub const DEFAULT_LANGUAGE: &str = "tr";

/// Messages of every loaded language, keyed by lowercase language tag.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    default_language: String,
    languages: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    pub fn new(default_language: &str) -> Self {
        Self {
            default_language: language::normalize(default_language),
            languages: HashMap::new(),
        }
    }

    /// Adds or replaces the messages of one language.
    pub fn with_messages(
        mut self,
        language: &str,
        messages: HashMap<String, String>,
    ) -> Self {
        self.languages.insert(language::normalize(language), messages);
        self
    }

    /// Loads every `*.json` file in `directory` as a language named after the file stem.
    ///
    /// # Arguments
    /// - `directory` - Directory holding the language files
    /// - `default_language` - Tag of the language used as the last fallback
    ///
    /// # Returns
    /// - `Ok(Catalog)` - Catalog holding every language file found
    /// - `Err(LocalizationError)` - A file could not be read or parsed, or the default
    ///   language has no file
    pub fn load_dir(directory: &Path, default_language: &str) -> Result<Self, LocalizationError> {
        let entries = fs::read_dir(directory).map_err(|source| LocalizationError::ReadDirectory {
            path: directory.to_path_buf(),
            source,
        })?;

        let mut catalog = Self::new(default_language);

        for entry in entries {
            let path = entry
                .map_err(|source| LocalizationError::ReadDirectory {
                    path: directory.to_path_buf(),
                    source,
                })?
                .path();

            let Some(language) = language_of(&path) else {
                tracing::debug!("Skipping non-language file {}", path.display());
                continue;
            };

            let messages = read_messages(&path)?;
            tracing::debug!(
                language = %language,
                messages = messages.len(),
                "Loaded language file"
            );
            catalog = catalog.with_messages(&language, messages);
        }

        if !catalog.languages.contains_key(&catalog.default_language) {
            return Err(LocalizationError::MissingDefaultLanguage(
                catalog.default_language,
            ));
        }

        Ok(catalog)
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Builds a translator for a raw `Accept-Language` header value.
    pub fn translator(&self, accept_language: Option<&str>) -> Translator<'_> {
        let mut languages: Vec<String> = Vec::new();

        let preferred = accept_language
            .map(language::parse_accept_language)
            .unwrap_or_default();

        for tag in preferred {
            let candidate = if self.has_language(&tag) {
                Some(tag)
            } else {
                language::base(&tag)
                    .filter(|base| self.has_language(base))
                    .map(str::to_string)
            };

            if let Some(candidate) = candidate {
                if !languages.contains(&candidate) {
                    languages.push(candidate);
                }
            }
        }

        if !languages.contains(&self.default_language) {
            languages.push(self.default_language.clone());
        }

        Translator {
            catalog: self,
            languages,
        }
    }

    fn message(&self, language: &str, key: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }
}

/// Resolves message keys for a single response.
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    languages: Vec<String>,
}

impl<'a> Translator<'a> {
    /// Languages tried when resolving a key, most preferred first.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Looks `key` up in each language in preference order.
    pub fn lookup(&self, key: &str) -> Option<&'a str> {
        self.languages
            .iter()
            .find_map(|language| self.catalog.message(language, key))
    }

    /// Resolves `key` and fills in `{name}` placeholders, using `fallback` when no
    /// language defines the key.
    pub fn translate(&self, key: &str, fallback: &str, args: &[(&'static str, String)]) -> String {
        Self::interpolate(self.lookup(key).unwrap_or(fallback), args)
    }

    /// Replaces every `{name}` in `template` with the matching argument value.
    pub fn interpolate(template: &str, args: &[(&'static str, String)]) -> String {
        args.iter().fold(template.to_string(), |message, (name, value)| {
            message.replace(&format!("{{{}}}", name), value)
        })
    }
}

fn language_of(path: &Path) -> Option<String> {
    if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
        return None;
    }

    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(language::normalize)
}

fn read_messages(path: &Path) -> Result<HashMap<String, String>, LocalizationError> {
    let contents = fs::read_to_string(path).map_err(|source| LocalizationError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| LocalizationError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}
