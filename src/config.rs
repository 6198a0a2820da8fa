//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/akinator/akinator.toml`
//! 3. Local config: `<dataset_dir>/.akinator.toml` (next to the dataset)
//! 4. Environment variables: `AKINATOR_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::Node;

/// Reference numbers printed after every round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Best-case question count to report
    pub best: usize,
    /// Worst-case question count to report
    pub worst: usize,
    /// Report the built tree's min/max leaf depth instead of `best`/`worst`
    pub derive_from_tree: bool,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            best: 6,
            worst: 50,
            derive_from_tree: false,
        }
    }
}

impl ReferenceConfig {
    /// `(best, worst)` for the given tree.
    pub fn numbers(&self, tree: &Node) -> (usize, usize) {
        if self.derive_from_tree {
            tree.depth_range()
        } else {
            (self.best, self.worst)
        }
    }
}

/// Raw reference config for intermediate parsing (`None` = not specified).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawReferenceConfig {
    pub best: Option<usize>,
    pub worst: Option<usize>,
    pub derive_from_tree: Option<bool>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub show_hints: Option<bool>,
    #[serde(default)]
    pub reference: RawReferenceConfig,
}

/// Unified configuration for akinator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Show the remaining-candidates hint next to each question
    pub show_hints: bool,
    /// Reference line settings
    pub reference: ReferenceConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hints: true,
            reference: ReferenceConfig::default(),
        }
    }
}

/// Get the XDG config directory for akinator.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "akinator").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("akinator.toml"))
}

/// Get the path to the local config file in a dataset directory.
pub fn local_config_path(dataset_dir: &Path) -> PathBuf {
    dataset_dir.join(".akinator.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        let reference = &overlay.reference;
        Self {
            show_hints: overlay.show_hints.unwrap_or(self.show_hints),
            reference: ReferenceConfig {
                best: reference.best.unwrap_or(self.reference.best),
                worst: reference.worst.unwrap_or(self.reference.worst),
                derive_from_tree: reference
                    .derive_from_tree
                    .unwrap_or(self.reference.derive_from_tree),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `dataset_dir` - Optional directory of the dataset for local config
    pub fn load(dataset_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = dataset_dir {
            current = current.with_local(dir)?;
        }

        Self::apply_env_overrides(current)
    }

    /// Merge `<dir>/.akinator.toml` if present.
    pub fn with_local(self, dir: &Path) -> Result<Self, ApplicationError> {
        let local_path = local_config_path(dir);
        if !local_path.exists() {
            return Ok(self);
        }
        let raw = load_raw_settings(&local_path)?;
        Ok(self.merge_with(&raw))
    }

    /// Apply AKINATOR_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("AKINATOR")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("show_hints") {
            settings.show_hints = val;
        }
        if let Ok(val) = config.get_int("reference.best") {
            settings.reference.best = to_count("reference.best", val)?;
        }
        if let Ok(val) = config.get_int("reference.worst") {
            settings.reference.worst = to_count("reference.worst", val)?;
        }
        if let Ok(val) = config.get_bool("reference.derive_from_tree") {
            settings.reference.derive_from_tree = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# akinator configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/akinator/akinator.toml
#   Local:  <dataset_dir>/.akinator.toml
#   Env:    AKINATOR_* environment variables (e.g. AKINATOR_REFERENCE__BEST=5)

# Show "(remaining yes/no)" next to each question
# show_hints = true

[reference]
# Numbers printed on the closing "Ideal best" line
# best = 6
# worst = 50

# Report the tree's shortest and longest question paths instead
# derive_from_tree = false
"#
        .to_string()
    }
}

fn to_count(key: &str, val: i64) -> Result<usize, ApplicationError> {
    usize::try_from(val).map_err(|_| ApplicationError::Config {
        message: format!("{key} must be non-negative, got {val}"),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attribute, Character};
    use tempfile::TempDir;

    fn person(alive: &str) -> Character {
        Character::from_fields(&["x", "m", alive, "a", "f", "n", "r", "no"]).unwrap()
    }

    fn two_leaf_tree() -> Node {
        Node::internal(
            Attribute::Alive,
            "true",
            Node::leaf(person("yes")),
            Node::leaf(person("no")),
        )
    }

    #[test]
    fn given_defaults_when_created_then_reference_is_six_and_fifty() {
        let settings = Settings::default();
        assert!(settings.show_hints);
        assert_eq!(settings.reference.best, 6);
        assert_eq!(settings.reference.worst, 50);
        assert!(!settings.reference.derive_from_tree);
    }

    #[test]
    fn given_fixed_reference_when_asking_numbers_then_ignores_tree() {
        let reference = ReferenceConfig::default();
        assert_eq!(reference.numbers(&two_leaf_tree()), (6, 50));
    }

    #[test]
    fn given_derived_reference_when_asking_numbers_then_uses_tree_depth() {
        let reference = ReferenceConfig {
            derive_from_tree: true,
            ..ReferenceConfig::default()
        };
        assert_eq!(reference.numbers(&two_leaf_tree()), (1, 1));
    }

    #[test]
    fn given_partial_overlay_when_merging_then_unspecified_fields_kept() {
        let raw: RawSettings = toml::from_str("[reference]\nworst = 12\n").unwrap();
        let merged = Settings::default().merge_with(&raw);
        assert!(merged.show_hints);
        assert_eq!(merged.reference.best, 6);
        assert_eq!(merged.reference.worst, 12);
    }

    #[test]
    fn given_local_config_when_loading_then_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            local_config_path(temp.path()),
            "show_hints = false\n[reference]\nderive_from_tree = true\n",
        )
        .unwrap();

        let settings = Settings::default().with_local(temp.path()).unwrap();

        assert!(!settings.show_hints);
        assert!(settings.reference.derive_from_tree);
    }

    #[test]
    fn given_malformed_local_config_when_loading_then_config_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(local_config_path(temp.path()), "show_hints = [").unwrap();

        let result = Settings::default().with_local(temp.path());

        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_settings_when_serializing_then_contains_all_sections() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("show_hints = true"));
        assert!(toml.contains("[reference]"));
    }

    #[test]
    fn given_template_when_parsed_then_valid_toml() {
        let raw: Result<RawSettings, _> = toml::from_str(&Settings::template());
        assert!(raw.is_ok());
    }
}
