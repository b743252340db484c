//! Home-relative path handling for the store location and display entries.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory. Paths without the
/// prefix, and any path when no home directory is known, pass through
/// unchanged.
pub fn expand_tilde(path: impl AsRef<Path>) -> PathBuf {
    match dirs::home_dir() {
        Some(home) => expand_tilde_in(path.as_ref(), &home),
        None => path.as_ref().to_path_buf(),
    }
}

fn expand_tilde_in(path: &Path, home: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    if rest.as_os_str().is_empty() {
        home.to_path_buf()
    } else {
        home.join(rest)
    }
}

/// Render a path for display, abbreviating the home directory prefix to `~`.
/// The home directory itself and paths outside it are returned as-is.
pub fn abbreviate_home(path: &str) -> String {
    match dirs::home_dir() {
        Some(home) => abbreviate_home_in(path, &home),
        None => path.to_string(),
    }
}

fn abbreviate_home_in(path: &str, home: &Path) -> String {
    match Path::new(path).strip_prefix(home) {
        Ok(rest) if !rest.as_os_str().is_empty() => {
            format!("~{}{}", std::path::MAIN_SEPARATOR, rest.display())
        }
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_prefix_expands_to_home() {
        let home = Path::new("/home/alice");
        assert_eq!(
            expand_tilde_in(Path::new("~/.z"), home),
            PathBuf::from("/home/alice/.z")
        );
        assert_eq!(expand_tilde_in(Path::new("~"), home), PathBuf::from("/home/alice"));
    }

    #[test]
    fn paths_without_tilde_pass_through() {
        let home = Path::new("/home/alice");
        assert_eq!(
            expand_tilde_in(Path::new("/var/tmp/.z"), home),
            PathBuf::from("/var/tmp/.z")
        );
        // ~user expansion is not supported
        assert_eq!(
            expand_tilde_in(Path::new("~bob/.z"), home),
            PathBuf::from("~bob/.z")
        );
    }

    #[test]
    fn home_descendants_abbreviate() {
        let home = Path::new("/home/alice");
        assert_eq!(
            abbreviate_home_in("/home/alice/projects/zjump", home),
            "~/projects/zjump"
        );
    }

    #[test]
    fn home_itself_and_outsiders_stay_verbatim() {
        let home = Path::new("/home/alice");
        assert_eq!(abbreviate_home_in("/home/alice", home), "/home/alice");
        assert_eq!(abbreviate_home_in("/srv/data", home), "/srv/data");
        assert_eq!(
            abbreviate_home_in("/home/alicette/projects", home),
            "/home/alicette/projects"
        );
    }
}
