//! TOML-backed display string table.
//!
//! A table is a flat TOML document of `resource_name = "text"` pairs.
//! Overrides (a translation, usually) are layered on top of the built-in
//! English strings; a key missing from both resolves to its resource name.

use std::collections::HashMap;
use std::path::Path;

use lp_core::ports::{StringTableError, StringsPort};
use lp_core::strings::StringKey;
use tracing::{debug, info};

const DEFAULTS: &str = include_str!("defaults.toml");

#[derive(Debug, Clone, Default)]
pub struct TomlStringTable {
    strings: HashMap<StringKey, String>,
}

impl TomlStringTable {
    /// Built-in English strings.
    pub fn builtin() -> Self {
        // The bundled table is covered by tests; an unparsable one degrades
        // to resource names rather than aborting.
        Self::parse(DEFAULTS).unwrap_or_default()
    }

    /// Parse a table. Unknown keys and non-string values are rejected.
    pub fn parse(content: &str) -> Result<Self, StringTableError> {
        let table: toml::Table = toml::from_str(content)?;
        let mut strings = HashMap::with_capacity(table.len());

        for (name, value) in table {
            let key: StringKey = name
                .parse()
                .map_err(|_| StringTableError::UnknownKey(name.clone()))?;
            let text = value
                .as_str()
                .ok_or_else(|| StringTableError::NotAString(name.clone()))?;
            strings.insert(key, text.to_string());
        }

        Ok(Self { strings })
    }

    /// Built-in strings with the entries of `path` layered on top.
    pub fn with_overrides_from_file(path: &Path) -> Result<Self, StringTableError> {
        let content = std::fs::read_to_string(path).map_err(|source| StringTableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let overrides = Self::parse(&content)?;
        info!(
            path = %path.display(),
            count = overrides.strings.len(),
            "Loaded string overrides"
        );

        let mut table = Self::builtin();
        table.strings.extend(overrides.strings);
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl StringsPort for TomlStringTable {
    fn lookup(&self, key: StringKey) -> String {
        match self.strings.get(&key) {
            Some(text) => text.clone(),
            None => {
                debug!(%key, "Missing display string, falling back to resource name");
                key.as_str().to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_table_covers_every_key() {
        let table = TomlStringTable::builtin();
        assert_eq!(table.len(), StringKey::ALL.len());
        for key in StringKey::ALL {
            assert_ne!(table.lookup(key), key.as_str(), "{key} is missing");
        }
    }

    #[test]
    fn format_interpolates_positional_links() {
        let table = TomlStringTable::builtin();
        assert_eq!(
            table.format(StringKey::HomeViewSourceCode, &["GitHub", "Telegram"]),
            "View source code at GitHub<br/>Join our Telegram channel"
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = TomlStringTable::parse("home_unknown = \"x\"").unwrap_err();
        assert!(matches!(err, StringTableError::UnknownKey(ref k) if k == "home_unknown"));
    }

    #[test]
    fn non_string_value_is_rejected() {
        let err = TomlStringTable::parse("copy = 1").unwrap_err();
        assert!(matches!(err, StringTableError::NotAString(_)));
    }

    #[test]
    fn missing_key_falls_back_to_resource_name() {
        let table = TomlStringTable::parse("copy = \"Kopieren\"").unwrap();
        assert_eq!(table.lookup(StringKey::Copy), "Kopieren");
        assert_eq!(table.lookup(StringKey::HomeDevice), "home_device");
    }

    #[test]
    fn overrides_layer_on_builtin() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("home_device = \"Gerät\"\ncopy = \"Kopieren\"\n".as_bytes())
            .unwrap();

        let table = TomlStringTable::with_overrides_from_file(file.path()).unwrap();

        assert_eq!(table.lookup(StringKey::HomeDevice), "Gerät");
        assert_eq!(table.lookup(StringKey::Copy), "Kopieren");
        assert_eq!(table.lookup(StringKey::AppName), "LSPatch");
    }

    #[test]
    fn missing_override_file_is_a_read_error() {
        let err = TomlStringTable::with_overrides_from_file(Path::new("/no/such/strings.toml"))
            .unwrap_err();
        assert!(matches!(err, StringTableError::Read { .. }));
    }
}
