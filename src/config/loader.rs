use std::fs;
use std::path::{Path, PathBuf};

use super::TcoConfig;
use crate::errors::TcoError;

pub const CONFIG_FILE_NAME: &str = ".vehicle-tco.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<TcoConfig, String> {
    let config = toml::from_str::<TcoConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    Ok(config.sanitized())
}

/// Load an explicitly requested config file. Unlike [`load_config`], a
/// missing or unparseable file is an error.
pub fn load_config_from_path(path: &Path) -> Result<TcoConfig, TcoError> {
    let contents = fs::read_to_string(path).map_err(|e| TcoError::io(path, e))?;
    let config =
        parse_and_validate_config(&contents).map_err(|message| TcoError::config(path, message))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Nearest `.vehicle-tco.toml` in `start` or its parents, looking at no more
/// than `max_depth` directories.
pub fn find_config_file(start: &Path, max_depth: usize) -> Option<PathBuf> {
    start
        .ancestors()
        .take(max_depth)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Discover a config file from the current directory upwards.
///
/// The nearest file wins. When it cannot be read or parsed the error is
/// logged and the built-in defaults are used; discovery never fails.
pub fn load_config() -> TcoConfig {
    match std::env::current_dir() {
        Ok(dir) => load_discovered_config(&dir, MAX_TRAVERSAL_DEPTH),
        Err(e) => {
            log::warn!("Cannot determine current directory: {}. Using default config.", e);
            TcoConfig::default()
        }
    }
}

fn load_discovered_config(start: &Path, max_depth: usize) -> TcoConfig {
    let Some(path) = find_config_file(start, max_depth) else {
        log::debug!(
            "No {} within {} directories of {}",
            CONFIG_FILE_NAME,
            max_depth,
            start.display()
        );
        return TcoConfig::default();
    };

    load_config_from_path(&path).unwrap_or_else(|e| {
        log::warn!("{}. Using default config.", e);
        TcoConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [condition]
            penalty_per_flag = 12.0
            red_flag_keywords = ["salvage", "flood"]

            [defaults]
            miles_per_year = 9000
        "#})
        .unwrap();

        let condition = config.condition();
        assert_eq!(condition.penalty_per_flag, 12.0);
        assert_eq!(condition.red_flag_keywords, vec!["salvage", "flood"]);
        assert_eq!(condition.bonus_cap, 15.0);
        assert_eq!(config.defaults().miles_per_year, 9000.0);
        assert_eq!(config.defaults().time_period_years, 3.0);
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let err = parse_and_validate_config("[risk\nhigh_confidence_score = ").unwrap_err();
        assert!(err.starts_with("Failed to parse .vehicle-tco.toml"));
    }

    #[test]
    fn test_find_config_file_is_bounded() {
        let root = TempDir::new().unwrap();
        let deep = root.path().join("a").join("b").join("c");
        fs::create_dir_all(&deep).unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(
            find_config_file(&deep, 4),
            Some(root.path().join(CONFIG_FILE_NAME))
        );
        assert_eq!(find_config_file(&deep, 3), None);
    }

    #[test]
    fn test_config_found_in_parent_directory() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("deals").join("2024");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[risk]\nhigh_confidence_score = 80.0\n",
        )
        .unwrap();

        let config = load_discovered_config(&nested, 5);
        assert_eq!(config.risk().high_confidence_score, 80.0);
        assert_eq!(config.risk().medium_risk_score, 50.0);
    }

    #[test]
    fn test_broken_nearest_config_falls_back_to_defaults() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("deals");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[risk]\nhigh_confidence_score = 80.0\n",
        )
        .unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "[risk\n").unwrap();

        assert_eq!(load_discovered_config(&nested, 5), TcoConfig::default());
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let root = TempDir::new().unwrap();
        let result = load_config_from_path(&root.path().join("missing.toml"));
        assert!(matches!(result, Err(TcoError::Io { .. })));
    }
}
