use std::env;
use std::fmt;

use crate::error::{Result, SparkError};
use crate::options::verbose;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Architecture {
    Amd64,
    Arm64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    TarGz,
    Zip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingSystem {
    Darwin,
    Linux,
    Windows,
    Freebsd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellProfile {
    Zsh,
    Bash,
}

impl Architecture {
    pub fn as_str(self) -> &'static str {
        match self {
            Architecture::Amd64 => "amd64",
            Architecture::Arm64 => "arm64",
        }
    }
}

impl Extension {
    pub fn as_str(self) -> &'static str {
        match self {
            Extension::TarGz => ".tar.gz",
            Extension::Zip => ".zip",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OperatingSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            OperatingSystem::Darwin => "darwin",
            OperatingSystem::Linux => "linux",
            OperatingSystem::Windows => "windows",
            OperatingSystem::Freebsd => "freebsd",
        }
    }
}

impl ShellProfile {
    /// Profile file name relative to the home directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ShellProfile::Zsh => ".zshrc",
            ShellProfile::Bash => ".bash_profile",
        }
    }
}

/// Description of the machine we are installing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformInfo {
    pub architecture: Architecture,
    pub extension: Extension,
    pub os: OperatingSystem,
    pub shell: ShellProfile,
}

pub fn detect() -> Result<PlatformInfo> {
    let shell = env::var("SHELL").unwrap_or_default();
    let platform = detect_from(env::consts::ARCH, env::consts::OS, &shell)?;
    verbose::log(&format!("Detected platform: {:?}", platform));
    Ok(platform)
}

/// Classify raw runtime values. `arch` and `os` use Rust's `std::env::consts`
/// naming, `shell` is the value of `$SHELL`.
pub fn detect_from(arch: &str, os: &str, shell: &str) -> Result<PlatformInfo> {
    let architecture = match arch {
        "x86_64" => Architecture::Amd64,
        "aarch64" => Architecture::Arm64,
        other => return Err(SparkError::UnsupportedArchitecture(other.to_string())),
    };

    let shell = shell_profile(shell)?;

    // windows and freebsd builds exist upstream but are not wired up here yet
    let (os, extension) = match os {
        "macos" => (OperatingSystem::Darwin, Extension::TarGz),
        "linux" => (OperatingSystem::Linux, Extension::TarGz),
        other => return Err(SparkError::UnsupportedOs(other.to_string())),
    };

    Ok(PlatformInfo {
        architecture,
        extension,
        os,
        shell,
    })
}

fn shell_profile(shell: &str) -> Result<ShellProfile> {
    let name = shell.rsplit('/').next().unwrap_or_default();
    match name {
        "bash" => Ok(ShellProfile::Bash),
        "zsh" => Ok(ShellProfile::Zsh),
        other => Err(SparkError::UnknownShell(other.to_string())),
    }
}
