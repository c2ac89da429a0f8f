//! On-disk cache of raw lyrics text, one `.lrc` file per track.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LyricsCache {
    dir: PathBuf,
}

impl LyricsCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, artist: &str, title: &str) -> PathBuf {
        self.dir
            .join(format!("{}-{}.lrc", slug(artist), slug(title)))
    }

    /// Cached text for a track. Unreadable entries count as misses.
    pub fn load(&self, artist: &str, title: &str) -> Option<String> {
        fs::read_to_string(self.path_for(artist, title)).ok()
    }

    pub fn store(&self, artist: &str, title: &str, content: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create dir {}", self.dir.display()))?;
        let path = self.path_for(artist, title);
        fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    /// Remove every cached `.lrc` file, returning how many were deleted.
    pub fn clear(&self) -> anyhow::Result<usize> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(e).with_context(|| format!("read dir {}", self.dir.display()));
            }
        };

        let mut removed = 0;
        for entry in entries {
            let path = entry.context("read cache entry")?.path();
            if path.extension().is_some_and(|ext| ext == "lrc") {
                fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// Lowercase, collapse every run of non-alphanumerics to `_`, trim `_` at the ends.
fn slug(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_gap = false;
    for c in s.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            in_gap = false;
        } else if !in_gap {
            out.push('_');
            in_gap = true;
        }
    }
    out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("Daft Punk"), "daft_punk");
        assert_eq!(slug("  AC/DC!! "), "ac_dc");
        assert_eq!(slug("Sigur Rós"), "sigur_r_s");
        assert_eq!(slug("---"), "");
    }

    #[test]
    fn test_path_for() {
        let cache = LyricsCache::new("/tmp/lyrics");
        assert_eq!(
            cache.path_for("Daft Punk", "One More Time (Radio Edit)"),
            PathBuf::from("/tmp/lyrics/daft_punk-one_more_time_radio_edit.lrc")
        );
    }

    #[test]
    fn test_store_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LyricsCache::new(dir.path().join("nested"));

        assert_eq!(cache.load("A", "B"), None);
        assert_eq!(cache.clear().unwrap(), 0);

        cache.store("A", "B", "[00:01.00]hi").unwrap();
        cache.store("A", "C", "[00:02.00]yo").unwrap();
        fs::write(cache.dir().join("keep.txt"), "x").unwrap();

        assert_eq!(cache.load("a", "b").as_deref(), Some("[00:01.00]hi"));
        assert_eq!(cache.clear().unwrap(), 2);
        assert_eq!(cache.load("A", "B"), None);
        assert!(cache.dir().join("keep.txt").exists());
    }
}
