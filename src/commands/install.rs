use colored::Colorize;
use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::resolve::VersionEntry;
use crate::config::{Settings, TOOLCHAIN_DIR};
use crate::error::Result;
use crate::options::verbose;
use crate::platform::{Extension, PlatformInfo};
use crate::utils::{self, download, extract};

/// Make sure `entry` is unpacked under the install root and return the path
/// of its toolchain directory.
///
/// An existing version directory counts as installed, whatever it holds.
pub fn install(
    client: &Client,
    entry: &VersionEntry,
    platform: &PlatformInfo,
    settings: &Settings,
) -> Result<PathBuf> {
    let version_root = settings.version_root(&entry.semver);
    let installed = version_root.join(TOOLCHAIN_DIR);

    if version_root.is_dir() {
        verbose::log(&format!("{} already present, skipping download", version_root.display()));
        return Ok(installed);
    }

    println!("Version is not local, downloading...");

    fs::create_dir_all(&settings.install_root)?;

    let package = utils::package_name(&entry.raw_label, platform);
    let download_url = utils::get_download_url(&settings.mirror_url, &package);
    let download_path = settings.install_root.join(&package);

    download::download_file(client, &download_url, &download_path)?;

    println!("Extracting Go {}...", entry.semver);
    extract::extract_archive(&download_path, &version_root, platform.extension)?;

    remove_archives(&settings.install_root, platform.extension);

    println!("Successfully installed Go {}", entry.semver.green());

    Ok(installed)
}

/// Delete every downloaded archive left in `root`. Failures only warn.
pub fn remove_archives(root: &Path, extension: Extension) {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            verbose::warn(&format!("Failed to scan {}: {}", root.display(), e));
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let is_archive = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(extension.as_str()));

        if !is_archive || !path.is_file() {
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => verbose::log(&format!("Removed {}", path.display())),
            Err(e) => verbose::warn(&format!("Failed to delete {}: {}", path.display(), e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::detect_from;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use httpmock::prelude::*;

    fn entry(label: &str, semver: &str) -> VersionEntry {
        VersionEntry {
            raw_label: label.to_string(),
            is_stable: true,
            is_archived: false,
            semver: semver.to_string(),
        }
    }

    fn toolchain_archive() -> Vec<u8> {
        let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
        let mut dir = tar::Header::new_gnu();
        dir.set_entry_type(tar::EntryType::Directory);
        dir.set_mode(0o755);
        dir.set_size(0);
        builder.append_data(&mut dir, "go/bin/", std::io::empty()).unwrap();

        let mut file = tar::Header::new_gnu();
        file.set_entry_type(tar::EntryType::Regular);
        file.set_mode(0o755);
        file.set_size(4);
        builder.append_data(&mut file, "go/bin/go", &b"gogo"[..]).unwrap();

        builder.into_inner().unwrap().finish().unwrap()
    }

    #[test]
    fn downloads_extracts_and_cleans_up() {
        let server = MockServer::start();
        let archive = server.mock(|when, then| {
            when.method(GET).path("/dl/go1.22.1.linux-amd64.tar.gz");
            then.status(200).body(toolchain_archive());
        });

        let temp = tempfile::tempdir().unwrap();
        let settings = Settings::new(temp.path().to_path_buf(), None, Some(server.url("/dl/")));
        let platform = detect_from("x86_64", "linux", "/bin/zsh").unwrap();

        let installed = install(&Client::new(), &entry("go1.22.1", "1.22.1"), &platform, &settings).unwrap();

        archive.assert_hits(1);
        assert_eq!(installed, settings.install_root.join("1.22.1").join("go"));
        assert_eq!(fs::read(installed.join("bin/go")).unwrap(), b"gogo");
        assert!(!settings.install_root.join("go1.22.1.linux-amd64.tar.gz").exists());
    }

    #[test]
    fn present_version_dir_skips_network() {
        let server = MockServer::start();
        let archive = server.mock(|when, then| {
            when.method(GET).path("/dl/go1.22.1.linux-amd64.tar.gz");
            then.status(200).body(toolchain_archive());
        });

        let temp = tempfile::tempdir().unwrap();
        let settings = Settings::new(temp.path().to_path_buf(), None, Some(server.url("/dl/")));
        let platform = detect_from("x86_64", "linux", "/bin/zsh").unwrap();
        let version = entry("go1.22.1", "1.22.1");

        install(&Client::new(), &version, &platform, &settings).unwrap();
        let second = install(&Client::new(), &version, &platform, &settings).unwrap();

        archive.assert_hits(1);
        assert!(second.join("bin/go").exists());
    }

    #[test]
    fn empty_version_dir_still_counts_as_installed() {
        let server = MockServer::start();
        let archive = server.mock(|when, then| {
            when.method(GET);
            then.status(200);
        });

        let temp = tempfile::tempdir().unwrap();
        let settings = Settings::new(temp.path().to_path_buf(), None, Some(server.url("/dl/")));
        fs::create_dir_all(settings.version_root("1.21.0")).unwrap();
        let platform = detect_from("x86_64", "linux", "/bin/bash").unwrap();

        install(&Client::new(), &entry("go1.21", "1.21.0"), &platform, &settings).unwrap();

        archive.assert_hits(0);
    }

    #[test]
    fn plain_file_named_like_version_is_not_an_install() {
        let server = MockServer::start();
        let archive = server.mock(|when, then| {
            when.method(GET).path("/dl/go1.22.1.linux-amd64.tar.gz");
            then.status(200).body(toolchain_archive());
        });

        let temp = tempfile::tempdir().unwrap();
        let settings = Settings::new(temp.path().to_path_buf(), None, Some(server.url("/dl/")));
        fs::create_dir_all(&settings.install_root).unwrap();
        fs::write(settings.version_root("1.22.1"), b"stray").unwrap();
        let platform = detect_from("x86_64", "linux", "/bin/bash").unwrap();

        let err = install(&Client::new(), &entry("go1.22.1", "1.22.1"), &platform, &settings).unwrap_err();

        archive.assert_hits(1);
        assert!(matches!(err, crate::error::SparkError::Extract { .. }));
    }

    #[test]
    fn failed_download_leaves_no_version_dir() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(404).body("404 page not found");
        });

        let temp = tempfile::tempdir().unwrap();
        let settings = Settings::new(temp.path().to_path_buf(), None, Some(server.url("/dl/")));
        let platform = detect_from("x86_64", "linux", "/bin/bash").unwrap();

        let result = install(&Client::new(), &entry("go1.22.1", "1.22.1"), &platform, &settings);

        assert!(result.is_err());
        assert!(!settings.version_root("1.22.1").exists());
    }

    #[test]
    fn removes_only_matching_archives() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("go1.22.1.linux-amd64.tar.gz"), b"x").unwrap();
        fs::write(temp.path().join("go1.21.0.linux-amd64.tar.gz"), b"x").unwrap();
        fs::write(temp.path().join("notes.txt"), b"keep").unwrap();
        fs::create_dir(temp.path().join("1.22.1")).unwrap();

        remove_archives(temp.path(), Extension::TarGz);

        assert!(!temp.path().join("go1.22.1.linux-amd64.tar.gz").exists());
        assert!(!temp.path().join("go1.21.0.linux-amd64.tar.gz").exists());
        assert!(temp.path().join("notes.txt").exists());
        assert!(temp.path().join("1.22.1").is_dir());
    }
}
