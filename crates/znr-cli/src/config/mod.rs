//! Credential file loading.
//!
//! Credentials live in an INI file:
//!
//! ```ini
//! cn = customer_name
//! un = user_name
//! pw = password
//! ```
//!
//! The older `[Dynect]` layout with `customer`, `user` and `password` keys is
//! read as a fallback.

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use dynect_core::Credentials;
use ini::{Ini, ParseOption};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ini";

const LEGACY_SECTION: &str = "Dynect";

/// One credential key: its INI key, legacy key and the name shown to users.
struct Field {
    key: &'static str,
    legacy_key: &'static str,
    label: &'static str,
}

const CUSTOMER: Field = Field {
    key: "cn",
    legacy_key: "customer",
    label: "Customer Name",
};

const USER: Field = Field {
    key: "un",
    legacy_key: "user",
    label: "User Name",
};

const PASSWORD: Field = Field {
    key: "pw",
    legacy_key: "password",
    label: "Password",
};

/// Platform config path, e.g. `~/.config/znr/config.ini` on Linux.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("net", "dynect", "znr").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Find the credentials file.
///
/// An explicit path must exist. Otherwise `./config.ini` wins over the
/// platform config directory.
pub fn locate(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        anyhow::bail!("config file not found: {}", path.display());
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(local);
    }

    match default_path() {
        Some(path) if path.is_file() => Ok(path),
        Some(path) => anyhow::bail!(
            "no {CONFIG_FILE_NAME} found in the current directory or at {}\n\n\
             Create one with:\n  \
             cn = customer_name\n  \
             un = user_name\n  \
             pw = password",
            path.display()
        ),
        None => anyhow::bail!("no {CONFIG_FILE_NAME} found in the current directory"),
    }
}

/// Locate and load credentials.
pub fn load(explicit: Option<&Path>) -> Result<Credentials> {
    let path = locate(explicit)?;
    load_from(&path)
}

/// Load credentials from a specific file, failing on the first missing field.
pub fn load_from(path: &Path) -> Result<Credentials> {
    // Backslashes are literal: passwords may contain them
    let options = ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_file_opt(path, options)
        .with_context(|| format!("Error reading config file {}", path.display()))?;

    let file_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    let get = |field: &Field| -> Result<String> {
        ini.general_section()
            .get(field.key)
            .or_else(|| {
                ini.section(Some(LEGACY_SECTION))
                    .and_then(|s| s.get(field.legacy_key))
            })
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .ok_or_else(|| {
                anyhow!(
                    "{} ({}) required in {file_name} for API login",
                    field.label,
                    field.key
                )
            })
    };

    Ok(Credentials::new(get(&CUSTOMER)?, get(&USER)?, get(&PASSWORD)?))
}
