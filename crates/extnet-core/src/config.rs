use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Query-string options (optional section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Percent-encode keys and values in `add-params` even without `--encode`.
    #[serde(default)]
    pub percent_encode: bool,
}

/// Global configuration loaded from `~/.config/extnet/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtnetConfig {
    /// Layouts (chrono strftime syntax) used by `is-date` when no `--format`
    /// is given. An empty list selects the lenient check.
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
    /// Optional query options; if missing, built-in defaults are used.
    #[serde(default)]
    pub query: Option<QueryConfig>,
}

fn default_date_formats() -> Vec<String> {
    ["%Y-%m-%d", "%Y-%m-%dT%H:%M:%S%:z", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ExtnetConfig {
    fn default() -> Self {
        Self {
            date_formats: default_date_formats(),
            query: None,
        }
    }
}

impl ExtnetConfig {
    pub fn percent_encode(&self) -> bool {
        self.query.as_ref().is_some_and(|q| q.percent_encode)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("extnet")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ExtnetConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ExtnetConfig> {
    if !path.exists() {
        let default_cfg = ExtnetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ExtnetConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ExtnetConfig::default();
        assert_eq!(cfg.date_formats.len(), 3);
        assert_eq!(cfg.date_formats[0], "%Y-%m-%d");
        assert!(cfg.query.is_none());
        assert!(!cfg.percent_encode());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ExtnetConfig {
            date_formats: vec!["%d.%m.%Y".to_string()],
            query: Some(QueryConfig {
                percent_encode: true,
            }),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ExtnetConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.date_formats, cfg.date_formats);
        assert_eq!(parsed.query, cfg.query);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: ExtnetConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.date_formats, default_date_formats());
        assert!(cfg.query.is_none());

        let cfg: ExtnetConfig = toml::from_str("date_formats = []\n[query]\n").unwrap();
        assert!(cfg.date_formats.is_empty());
        assert_eq!(cfg.query, Some(QueryConfig::default()));
        assert!(!cfg.percent_encode());
    }

    #[test]
    fn config_toml_query_section() {
        let toml = r#"
            date_formats = ["%Y/%m/%d"]

            [query]
            percent_encode = true
        "#;
        let cfg: ExtnetConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.date_formats, vec!["%Y/%m/%d".to_string()]);
        assert!(cfg.percent_encode());
    }

    #[test]
    fn load_or_init_writes_default_then_reads_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created.date_formats, default_date_formats());

        fs::write(&path, "date_formats = [\"%d.%m.%Y\"]\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.date_formats, vec!["%d.%m.%Y".to_string()]);
    }

    #[test]
    fn load_or_init_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "date_formats = 5").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse"));
    }
}
