use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub sync: SyncConfig,
    pub display: DisplayConfig,
    pub player: PlayerConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Added to the player position before matching lines (negative = earlier)
    pub offset_ms: i64,
    /// Highlight the active line word by word instead of all at once
    pub karaoke: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub dim_inactive: bool,
    pub show_progress: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// playerctl player name (see `playerctl -l`)
    pub name: String,
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub cache_dir: PathBuf,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: defaults::THEME.to_string(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            offset_ms: 0,
            karaoke: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dim_inactive: true,
            show_progress: true,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: defaults::PLAYER.to_string(),
            poll_interval_ms: defaults::POLL_INTERVAL_MS,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            cache_dir: defaults::cache_dir(),
        }
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "lyriterm", "lyriterm")
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = project_dirs().context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

fn resolve_path(override_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    match override_path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

fn write_config(cfg: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = resolve_path(override_path)?;
    write_config(cfg, &path)
}

/// Load the config, writing defaults first if the file doesn't exist yet.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = resolve_path(override_path)?;

    if !path.exists() {
        let cfg = defaults::defaults();
        write_config(&cfg, &path).context("write default config")?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let cfg = load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.theme.name, "spotify");
        assert_eq!(cfg.sync.offset_ms, 0);
        assert!(cfg.sync.karaoke);
        assert_eq!(cfg.player.poll_interval_ms, 100);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = defaults::defaults();
        cfg.theme.name = "nord".into();
        cfg.sync.offset_ms = -350;
        cfg.display.dim_inactive = false;
        save(&cfg, Some(&path)).unwrap();

        assert_eq!(load(Some(&path)).unwrap(), cfg);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[sync]\noffset_ms = 200\n").unwrap();

        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.sync.offset_ms, 200);
        assert!(cfg.sync.karaoke);
        assert_eq!(cfg.player.name, "spotify");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[sync]\noffset_ms = \"soon\"\n").unwrap();

        assert!(load(Some(&path)).is_err());
    }
}
