//! Image path references for README markup

use std::path::{Component, Path, MAIN_SEPARATOR};

/// Reference `path` relative to `base` when it lies under it.
///
/// The comparison is lexical, with `.` components ignored. Paths outside
/// `base` are used as given. Separators are always `/`.
pub fn relative_reference(path: &Path, base: &Path) -> String {
    match strip_base(path, base) {
        Some(relative) => relative,
        None => forward_slashes(path),
    }
}

fn strip_base(path: &Path, base: &Path) -> Option<String> {
    if path.is_absolute() != base.is_absolute() {
        return None;
    }

    let mut rest = path.components().filter(|c| *c != Component::CurDir);
    for part in base.components().filter(|c| *c != Component::CurDir) {
        if rest.next()? != part {
            return None;
        }
    }

    let parts: Vec<String> = rest
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts.is_empty() {
        Some(".".to_string())
    } else {
        Some(parts.join("/"))
    }
}

fn forward_slashes(path: &Path) -> String {
    let text = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(MAIN_SEPARATOR, "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(path: &str, base: &str) -> String {
        relative_reference(Path::new(path), Path::new(base))
    }

    #[test]
    fn test_current_dir_base() {
        assert_eq!(reference("assets/logo-light.svg", "."), "assets/logo-light.svg");
        assert_eq!(reference("./assets/logo-light.svg", "."), "assets/logo-light.svg");
    }

    #[test]
    fn test_descendant_of_workspace() {
        assert_eq!(
            reference("/home/runner/work/repo/assets/logo-dark.svg", "/home/runner/work/repo"),
            "assets/logo-dark.svg"
        );
    }

    #[test]
    fn test_outside_workspace_kept() {
        assert_eq!(reference("/tmp/logo-dark.svg", "/home/runner/work/repo"), "/tmp/logo-dark.svg");
    }

    #[test]
    fn test_partial_name_is_not_descendant() {
        assert_eq!(reference("/srv/repo-2/logo.svg", "/srv/repo"), "/srv/repo-2/logo.svg");
    }

    #[test]
    fn test_absolute_against_relative_base() {
        assert_eq!(reference("/abs/logo.svg", "."), "/abs/logo.svg");
        assert_eq!(reference("assets/logo.svg", "/abs"), "assets/logo.svg");
    }

    #[test]
    fn test_path_equal_to_base() {
        assert_eq!(reference("/srv/repo", "/srv/repo"), ".");
    }
}
