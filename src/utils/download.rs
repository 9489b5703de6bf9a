use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{Result, SparkError};
use crate::options::verbose;

/// One record of the remote release index.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRelease {
    pub version: String,
    pub stable: bool,
}

fn get(client: &Client, url: &str) -> reqwest::Result<Response> {
    verbose::log(&format!("GET {}", url));
    client.get(url).send()
}

fn check_status(url: &str, resp: &Response) -> Result<()> {
    let status = resp.status();
    if !status.is_success() {
        return Err(SparkError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(())
}

pub fn fetch_catalog(client: &Client, url: &str) -> Result<Vec<CatalogRelease>> {
    let resp = get(client, url).map_err(|e| SparkError::catalog(url, e))?;
    check_status(url, &resp)?;

    let releases: Vec<CatalogRelease> =
        serde_json::from_reader(resp).map_err(|e| SparkError::catalog(url, e))?;
    verbose::log(&format!("{} releases listed by {}", releases.len(), url));

    Ok(releases)
}

/// Stream `url` into `dest_path`, reporting progress on the way.
///
/// The destination file is only created once the server answered with a
/// success status, so an error page never ends up on disk.
pub fn download_file(client: &Client, url: &str, dest_path: &Path) -> Result<()> {
    println!("Downloading from {}", url);

    let resp = get(client, url).map_err(|e| SparkError::download(url, e))?;
    check_status(url, &resp)?;

    let pb = match resp.content_length() {
        Some(total) if total > 0 => {
            let pb = ProgressBar::new(total);
            pb.set_style(ProgressStyle::default_bar()
                .template("Downloading... {percent}% [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap()
                .progress_chars("#>-"));
            pb
        }
        _ => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::default_spinner()
                .template("{spinner:.green} Downloading... unknown progress ({bytes})")
                .unwrap());
            pb
        }
    };

    let mut file = File::create(dest_path)?;
    let mut reader = pb.wrap_read(resp);
    io::copy(&mut reader, &mut file).map_err(|e| SparkError::download(url, e))?;
    pb.finish_with_message("Download complete");

    Ok(())
}
