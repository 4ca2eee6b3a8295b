//! Action catalog loader.
//!
//! Loads action definitions from RON lists and registers them.

use std::path::Path;

use tactics_core::{ActionDefinition, ActionRegistry};

use crate::embedded::ACTION_CATALOGS;
use crate::loaders::{LoadResult, read_file};

/// Loader for action catalogs from RON files.
///
/// RON format: `Vec<ActionDefinition>`.
pub struct ActionCatalogLoader;

impl ActionCatalogLoader {
    /// Parses one catalog. `name` only labels errors.
    pub fn parse(source: &str, name: &str) -> LoadResult<Vec<ActionDefinition>> {
        ron::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse action catalog {}: {}", name, e))
    }

    /// Loads the definitions in a single catalog file.
    pub fn load(path: &Path) -> LoadResult<Vec<ActionDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Loads every catalog in `paths` into one registry.
    ///
    /// Fails on the first unreadable file, parse error, duplicate id or
    /// malformed definition.
    pub fn load_registry<P: AsRef<Path>>(paths: &[P]) -> LoadResult<ActionRegistry> {
        let mut registry = ActionRegistry::new();
        for path in paths {
            let path = path.as_ref();
            for definition in Self::load(path)? {
                registry.register(definition).map_err(|e| {
                    anyhow::anyhow!("Failed to register action from {}: {}", path.display(), e)
                })?;
            }
        }
        Ok(registry)
    }

    /// Builds a registry from the embedded catalogs.
    pub fn embedded() -> LoadResult<ActionRegistry> {
        let mut registry = ActionRegistry::new();
        for (name, source) in ACTION_CATALOGS {
            for definition in Self::parse(source, name)? {
                registry.register(definition).map_err(|e| {
                    anyhow::anyhow!("Failed to register action from {}: {}", name, e)
                })?;
            }
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tactics_core::{ActionCategory, EffectKind, ResourceKind};

    #[test]
    fn embedded_catalogs_register() {
        let registry = ActionCatalogLoader::embedded().expect("embedded catalogs load");

        assert!(registry.len() >= 8);

        let fireball = registry.get("fireball").expect("fireball is registered");
        assert_eq!(fireball.category, ActionCategory::Magic);
        assert_eq!(fireball.cost_of(ResourceKind::Mp), 15);
        assert!(fireball.targeting.is_area());
        assert!(matches!(fireball.effects[0], EffectKind::Damage(_)));

        let meditate = registry.get("meditate").expect("meditate is registered");
        assert!(!meditate.targeting.requires_target);
    }

    #[test]
    fn load_registry_rejects_duplicates_across_files() {
        let source = r#"[(id: "jab", name: "Jab", effects: [Damage((amount: 5, damage_type: Physical))])]"#;
        let mut first = tempfile::NamedTempFile::new().unwrap();
        let mut second = tempfile::NamedTempFile::new().unwrap();
        first.write_all(source.as_bytes()).unwrap();
        second.write_all(source.as_bytes()).unwrap();

        let err = ActionCatalogLoader::load_registry(&[first.path(), second.path()]).unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn parse_errors_name_the_catalog() {
        let err = ActionCatalogLoader::parse("[(id: ", "broken.ron").unwrap_err();
        assert!(err.to_string().contains("broken.ron"));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = ActionCatalogLoader::load(&dir.path().join("missing.ron")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
