use reqwest::blocking::Client;
use std::collections::HashSet;

use crate::config::Settings;
use crate::error::{Result, SparkError};
use crate::options::verbose;
use crate::utils::{self, download::{self, CatalogRelease}};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    /// Label as reported by the index, e.g. `go1.22.0`.
    pub raw_label: String,
    pub is_stable: bool,
    pub is_archived: bool,
    pub semver: String,
}

pub fn resolve_version(client: &Client, settings: &Settings, query: &str) -> Result<VersionEntry> {
    let stable = download::fetch_catalog(client, &settings.catalog_url(false))?;
    let all = download::fetch_catalog(client, &settings.catalog_url(true))?;

    let entries = build_entries(&stable, all)?;
    verbose::log(&format!(
        "{} versions known, {} archived",
        entries.len(),
        entries.iter().filter(|e| e.is_archived).count()
    ));

    find_match(entries, query)
}

/// Flag every release missing from the stable-only listing as archived and
/// derive its semver. Order of `all` is kept.
pub fn build_entries(stable: &[CatalogRelease], all: Vec<CatalogRelease>) -> Result<Vec<VersionEntry>> {
    let current: HashSet<&str> = stable.iter().map(|r| r.version.as_str()).collect();

    all.into_iter()
        .map(|release| {
            let semver = utils::normalize_semver(&release.version)?;
            Ok(VersionEntry {
                is_archived: !current.contains(release.version.as_str()),
                is_stable: release.stable,
                raw_label: release.version,
                semver,
            })
        })
        .collect()
}

/// First entry wins, so the index's newest-first ordering decides between
/// several candidates.
pub fn find_match(entries: Vec<VersionEntry>, query: &str) -> Result<VersionEntry> {
    let wants_stable = query == "stable" || query == "lts";

    entries
        .into_iter()
        .find(|entry| {
            if wants_stable {
                entry.is_stable
            } else {
                entry.semver.starts_with(query)
            }
        })
        .ok_or_else(|| SparkError::NoMatchingVersion(query.to_string()))
}
