use directories::BaseDirs;
use std::env;
use std::path::PathBuf;
use anyhow::{Result, Context};

use crate::platform::PlatformInfo;

pub const DEFAULT_MIRROR: &str = "https://go.dev/dl/";
pub const ROOT_ENV: &str = "GO_SPARK_ROOT";
pub const MIRROR_ENV: &str = "GO_SPARK_MIRROR";

/// Name of the top-level directory inside every Go release archive, also
/// used for the "current" symlink in the install root.
pub const TOOLCHAIN_DIR: &str = "go";

#[derive(Debug, Clone)]
pub struct Settings {
    pub home_dir: PathBuf,
    pub install_root: PathBuf,
    pub mirror_url: String,
}

impl Settings {
    pub fn load() -> Result<Settings> {
        let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;
        let home_dir = base_dirs.home_dir().to_path_buf();

        let install_root = env::var_os(ROOT_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let mirror_url = env::var(MIRROR_ENV).ok().filter(|v| !v.is_empty());

        Ok(Settings::new(home_dir, install_root, mirror_url))
    }

    pub fn new(home_dir: PathBuf, install_root: Option<PathBuf>, mirror_url: Option<String>) -> Settings {
        let install_root = install_root.unwrap_or_else(|| home_dir.join(".g"));

        let mut mirror_url = mirror_url.unwrap_or_else(|| DEFAULT_MIRROR.to_string());
        if !mirror_url.ends_with('/') {
            mirror_url.push('/');
        }

        Settings {
            home_dir,
            install_root,
            mirror_url,
        }
    }

    pub fn catalog_url(&self, include_all: bool) -> String {
        if include_all {
            format!("{}?mode=json&include=all", self.mirror_url)
        } else {
            format!("{}?mode=json", self.mirror_url)
        }
    }

    pub fn version_root(&self, semver: &str) -> PathBuf {
        self.install_root.join(semver)
    }

    pub fn link_path(&self) -> PathBuf {
        self.install_root.join(TOOLCHAIN_DIR)
    }

    pub fn bin_path(&self) -> PathBuf {
        self.link_path().join("bin")
    }

    pub fn profile_path(&self, platform: &PlatformInfo) -> PathBuf {
        self.home_dir.join(platform.shell.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::detect_from;

    #[test]
    fn defaults_to_hidden_dir_under_home() {
        let settings = Settings::new(PathBuf::from("/home/dev"), None, None);

        assert_eq!(settings.install_root, PathBuf::from("/home/dev/.g"));
        assert_eq!(settings.link_path(), PathBuf::from("/home/dev/.g/go"));
        assert_eq!(settings.bin_path(), PathBuf::from("/home/dev/.g/go/bin"));
        assert_eq!(settings.version_root("1.22.1"), PathBuf::from("/home/dev/.g/1.22.1"));
    }

    #[test]
    fn catalog_urls_share_the_mirror() {
        let settings = Settings::new(PathBuf::from("/h"), None, Some("http://127.0.0.1:5000/dl".to_string()));

        assert_eq!(settings.mirror_url, "http://127.0.0.1:5000/dl/");
        assert_eq!(settings.catalog_url(false), "http://127.0.0.1:5000/dl/?mode=json");
        assert_eq!(settings.catalog_url(true), "http://127.0.0.1:5000/dl/?mode=json&include=all");
    }

    #[test]
    fn profile_path_follows_shell() {
        let settings = Settings::new(PathBuf::from("/home/dev"), Some(PathBuf::from("/opt/g")), None);
        let platform = detect_from("x86_64", "linux", "/bin/zsh").unwrap();

        assert_eq!(settings.profile_path(&platform), PathBuf::from("/home/dev/.zshrc"));
        assert_eq!(settings.link_path(), PathBuf::from("/opt/g/go"));
    }
}
