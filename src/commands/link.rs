use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::{Result, SparkError};
use crate::options::verbose;

/// Point `link_path` at `installed_path`, replacing whatever was there.
///
/// Readers running between the removal and the new link see no link at all.
pub fn relink(installed_path: &Path, link_path: &Path) -> Result<()> {
    let link_err = |source| SparkError::Link {
        path: link_path.to_path_buf(),
        source,
    };

    if let Ok(meta) = fs::symlink_metadata(link_path) {
        verbose::log(&format!("Removing existing {}", link_path.display()));
        if meta.is_dir() {
            fs::remove_dir_all(link_path).map_err(link_err)?;
        } else {
            fs::remove_file(link_path).map_err(link_err)?;
        }
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs as unix_fs;
        unix_fs::symlink(installed_path, link_path).map_err(link_err)?;
    }

    #[cfg(windows)]
    {
        use std::os::windows::fs as windows_fs;
        windows_fs::symlink_dir(installed_path, link_path).map_err(link_err)?;
    }

    Ok(())
}

pub fn export_line(bin_path: &Path) -> String {
    format!("export PATH={}:$PATH", bin_path.display())
}

/// Append the PATH export for `bin_path` to the profile unless some line
/// already contains it. Returns whether the file was changed.
///
/// The profile has to exist already.
pub fn ensure_path_export(profile_path: &Path, bin_path: &Path) -> Result<bool> {
    let profile_err = |source| SparkError::Profile {
        path: profile_path.to_path_buf(),
        source,
    };
    let export_cmd = export_line(bin_path);

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(profile_path)
        .map_err(profile_err)?;

    let mut ends_with_newline = true;
    {
        let mut reader = BufReader::new(&mut file);
        let needle = export_cmd.as_bytes();
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader.read_until(b'\n', &mut line).map_err(profile_err)?;
            if read == 0 {
                break;
            }
            // profiles are not guaranteed to be UTF-8
            if line.windows(needle.len()).any(|w| w == needle) {
                verbose::log(&format!("{} already exports {}", profile_path.display(), bin_path.display()));
                return Ok(false);
            }
            ends_with_newline = line.ends_with(b"\n");
        }
    }

    file.seek(SeekFrom::End(0)).map_err(profile_err)?;
    if !ends_with_newline {
        file.write_all(b"\n").map_err(profile_err)?;
    }
    writeln!(file, "{}", export_cmd).map_err(profile_err)?;

    Ok(true)
}
