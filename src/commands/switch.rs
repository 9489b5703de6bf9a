use colored::Colorize;
use reqwest::blocking::Client;
use std::path::PathBuf;

use crate::commands::{install, link, resolve};
use crate::config::Settings;
use crate::error::Result;
use crate::platform::{self, PlatformInfo};

pub fn execute(query: &str, settings: &Settings) -> Result<()> {
    let platform = platform::detect()?;
    let client = Client::new();

    run(&client, settings, &platform, query)?;

    println!("{}", "Done".green());
    Ok(())
}

/// Resolve `query`, install it if needed and make it the current toolchain.
/// Returns the toolchain directory the link now points at.
pub fn run(client: &Client, settings: &Settings, platform: &PlatformInfo, query: &str) -> Result<PathBuf> {
    println!("Searching for a version that matches {}", query);
    let entry = resolve::resolve_version(client, settings, query)?;
    println!("Found matching go version {}", entry.semver.green());

    let installed = install::install(client, &entry, platform, settings)?;

    let link_path = settings.link_path();
    println!("Updating symlink {} => {}", installed.display(), link_path.display());
    link::relink(&installed, &link_path)?;

    let profile_path = settings.profile_path(platform);
    if link::ensure_path_export(&profile_path, &settings.bin_path())? {
        println!("Added {} to PATH in {}", settings.bin_path().display(), profile_path.display());
    }

    Ok(installed)
}
