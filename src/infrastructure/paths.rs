//! Data directory resolution and path helpers.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "SHOWCASE_DATA_DIR";

/// Returns the directory the state file and traces live in.
///
/// Resolution order:
/// 1. `configured`, if set
/// 2. `$SHOWCASE_DATA_DIR`
/// 3. `$HOME/.local/share/showcase`
/// 4. `./.showcase`
#[must_use]
pub fn resolve_data_dir(configured: Option<&Path>) -> PathBuf {
    resolve_from(
        configured,
        std::env::var_os(DATA_DIR_ENV),
        std::env::var_os("HOME"),
    )
}

fn resolve_from(configured: Option<&Path>, env: Option<OsString>, home: Option<OsString>) -> PathBuf {
    if let Some(path) = configured {
        return path.to_path_buf();
    }

    let non_empty = |value: Option<OsString>| value.filter(|v| !v.is_empty());

    if let Some(dir) = non_empty(env) {
        return PathBuf::from(dir);
    }

    non_empty(home).map_or_else(
        || PathBuf::from(".showcase"),
        |home| PathBuf::from(home).join(".local").join("share").join("showcase"),
    )
}

/// Expands a leading `~` to `$HOME`.
///
/// Paths without a leading `~`, or any path when `HOME` is unset, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use showcase::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_with_home(path, std::env::var_os("HOME"))
}

fn expand_with_home(path: &str, home: Option<OsString>) -> PathBuf {
    let Some(home) = home.filter(|h| !h.is_empty()) else {
        return PathBuf::from(path);
    };

    if path == "~" {
        PathBuf::from(home)
    } else if let Some(rest) = path.strip_prefix("~/") {
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_dir_wins() {
        let dir = resolve_from(
            Some(Path::new("/srv/showcase")),
            Some("/env".into()),
            Some("/home/u".into()),
        );
        assert_eq!(dir, PathBuf::from("/srv/showcase"));
    }

    #[test]
    fn env_then_home_then_cwd() {
        assert_eq!(
            resolve_from(None, Some("/env".into()), Some("/home/u".into())),
            PathBuf::from("/env")
        );
        assert_eq!(
            resolve_from(None, Some(OsString::new()), Some("/home/u".into())),
            PathBuf::from("/home/u/.local/share/showcase")
        );
        assert_eq!(resolve_from(None, None, None), PathBuf::from(".showcase"));
    }

    #[test]
    fn tilde_expansion() {
        let home = Some(OsString::from("/home/u"));
        assert_eq!(expand_with_home("~/presets.toml", home.clone()), PathBuf::from("/home/u/presets.toml"));
        assert_eq!(expand_with_home("~", home.clone()), PathBuf::from("/home/u"));
        assert_eq!(expand_with_home("/etc/x", home), PathBuf::from("/etc/x"));
        assert_eq!(expand_with_home("~/x", None), PathBuf::from("~/x"));
    }
}
