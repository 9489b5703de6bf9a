use flate2::read::GzDecoder;
use std::fs;
use std::io;
use std::path::{Component, Path};
use tar::EntryType;

use crate::error::{Result, SparkError};
use crate::options::verbose;
use crate::platform::Extension;

pub fn extract_archive(archive_path: &Path, extract_dir: &Path, extension: Extension) -> Result<()> {
    match extension {
        Extension::TarGz => extract_tar_gz(archive_path, extract_dir),
        Extension::Zip => Err(SparkError::UnsupportedArchive(extension)),
    }
}

fn io_at(path: &Path) -> impl Fn(io::Error) -> SparkError + '_ {
    move |source| SparkError::Extract {
        path: path.to_path_buf(),
        source,
    }
}

/// Unpack a gzip-compressed tarball under `extract_dir`.
///
/// Only directories and regular files are supported; any other entry type
/// stops extraction before later entries are touched. Whatever was written up
/// to that point is left in place.
fn extract_tar_gz(archive_path: &Path, extract_dir: &Path) -> Result<()> {
    let file = fs::File::open(archive_path).map_err(io_at(archive_path))?;
    let decompressed = GzDecoder::new(file);
    let mut archive = tar::Archive::new(decompressed);

    fs::create_dir_all(extract_dir).map_err(io_at(extract_dir))?;

    for entry in archive.entries().map_err(io_at(archive_path))? {
        let mut entry = entry.map_err(io_at(archive_path))?;
        let relative = entry.path().map_err(io_at(archive_path))?.into_owned();
        let name = relative.display().to_string();

        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(SparkError::UnsafeEntryPath(name));
        }

        let target = extract_dir.join(&relative);
        let mode = entry.header().mode().map_err(io_at(archive_path))?;

        match entry.header().entry_type() {
            EntryType::Directory => {
                fs::create_dir_all(&target).map_err(io_at(&target))?;
                set_mode(&target, mode)?;
            }
            EntryType::Regular => {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).map_err(io_at(parent))?;
                }
                let mut outfile = fs::File::create(&target).map_err(io_at(&target))?;
                io::copy(&mut entry, &mut outfile).map_err(io_at(&target))?;
                set_mode(&target, mode)?;
            }
            other => {
                return Err(SparkError::UnsupportedEntry {
                    name,
                    kind: format!("{:?}", other),
                });
            }
        }
    }

    verbose::log(&format!("Extracted {} into {}", archive_path.display(), extract_dir.display()));
    Ok(())
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o7777)).map_err(io_at(path))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
