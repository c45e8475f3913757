//! Resolution of caller-supplied record paths against the data directory

use std::path::{Component, Path, PathBuf};

use super::errors::{StoreError, StoreResult};

/// Join a relative path onto `base`, rejecting anything that could escape it
///
/// Absolute paths, drive prefixes and `..` components are refused; `.`
/// components are dropped.
pub fn resolve_relative(base: &Path, relative: &str) -> StoreResult<PathBuf> {
    let invalid = |reason: &str| StoreError::InvalidPath {
        path: relative.to_string(),
        reason: reason.to_string(),
    };

    if relative.trim().is_empty() {
        return Err(invalid("path is empty"));
    }

    let mut resolved = base.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir => return Err(invalid("parent directory references are not allowed")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("path must be relative to the data directory"));
            }
        }
    }

    if resolved == base {
        return Err(invalid("path does not name a file"));
    }

    Ok(resolved)
}

/// Sibling path that receives the previous content before an overwrite
///
/// `events.json` becomes `events.json.backup`.
pub fn backup_path(path: &Path) -> PathBuf {
    path.with_extension(crate::utils::BACKUP_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_nested_relative_paths() {
        let base = Path::new("/data");
        assert_eq!(
            resolve_relative(base, "hse/infoEvents.json").unwrap(),
            PathBuf::from("/data/hse/infoEvents.json")
        );
        assert_eq!(
            resolve_relative(base, "./a.json").unwrap(),
            PathBuf::from("/data/a.json")
        );
    }

    #[test]
    fn rejects_escapes() {
        let base = Path::new("/data");
        for bad in ["../secret.json", "hse/../../x.json", "/etc/passwd", "", "  ", "."] {
            let err = resolve_relative(base, bad).unwrap_err();
            assert!(matches!(err, StoreError::InvalidPath { .. }), "{bad} should be rejected");
        }
    }

    #[test]
    fn backup_replaces_extension() {
        assert_eq!(
            backup_path(Path::new("/data/hse/events.json")),
            PathBuf::from("/data/hse/events.json.backup")
        );
        assert_eq!(backup_path(Path::new("/data/list")), PathBuf::from("/data/list.json.backup"));
    }
}
