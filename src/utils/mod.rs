pub mod download;
pub mod extract;

use regex::Regex;
use semver::{Prerelease, Version};
use std::sync::OnceLock;

use crate::error::{Result, SparkError};
use crate::platform::PlatformInfo;

const LABEL_PREFIX: &str = "go";

fn label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:([A-Za-z]+)(\d+)?)?)?$")
            .expect("label pattern is valid")
    })
}

/// Turn a release label such as `go1.21rc1` into `1.21.0-rc.1`.
///
/// Missing numeric components default to zero, so a bare `go` becomes `0.0.0`.
/// A distribution tag is only accepted after the major component; its build
/// number is optional (`go1.9beta` becomes `1.9.0-beta`).
pub fn normalize_semver(label: &str) -> Result<String> {
    let rest = label
        .strip_prefix(LABEL_PREFIX)
        .ok_or_else(|| SparkError::VersionFormat(label.to_string()))?;

    let caps = label_pattern()
        .captures(rest)
        .ok_or_else(|| SparkError::VersionFormat(label.to_string()))?;

    let component = |i: usize| -> Result<u64> {
        match caps.get(i) {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| SparkError::VersionFormat(label.to_string())),
            None => Ok(0),
        }
    };

    let mut version = Version::new(component(1)?, component(2)?, component(3)?);

    if let Some(tag) = caps.get(4) {
        let pre = match caps.get(5) {
            Some(_) => format!("{}.{}", tag.as_str(), component(5)?),
            None => tag.as_str().to_string(),
        };
        version.pre = Prerelease::new(&pre).map_err(|_| SparkError::VersionFormat(label.to_string()))?;
    }

    Ok(version.to_string())
}

pub fn package_name(label: &str, platform: &PlatformInfo) -> String {
    format!(
        "{}.{}-{}{}",
        label,
        platform.os.as_str(),
        platform.architecture.as_str(),
        platform.extension.as_str()
    )
}

pub fn get_download_url(mirror_url: &str, package: &str) -> String {
    format!("{}{}", mirror_url, package)
}
