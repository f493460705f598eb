use std::path::{Path, PathBuf};

/// Resolve the vercalc state directory, where the config file lives.
pub fn resolve_config_dir() -> PathBuf {
    if let Ok(override_dir) = std::env::var("VERCALC_STATE_DIR") {
        let trimmed = override_dir.trim();
        if !trimmed.is_empty() {
            return resolve_user_path(trimmed);
        }
    }
    let home = resolve_home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".vercalc")
}

/// Resolve the home directory, preferring VERCALC_HOME.
pub fn resolve_home_dir() -> Option<PathBuf> {
    if let Ok(vercalc_home) = std::env::var("VERCALC_HOME") {
        let trimmed = vercalc_home.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed).canonicalize().unwrap_or_else(|_| PathBuf::from(trimmed)));
        }
    }
    dirs::home_dir()
}

/// Resolve a user path, expanding ~ to home directory.
pub fn resolve_user_path(input: &str) -> PathBuf {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return PathBuf::new();
    }
    if trimmed.starts_with('~') {
        let home = resolve_home_dir().unwrap_or_else(|| PathBuf::from("."));
        let rest = trimmed.trim_start_matches('~').trim_start_matches('/');
        if rest.is_empty() {
            return home;
        }
        return home.join(rest);
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_user_path_blank() {
        assert_eq!(resolve_user_path(""), PathBuf::new());
        assert_eq!(resolve_user_path("   "), PathBuf::new());
    }

    #[test]
    fn resolve_user_path_tilde_subdir() {
        let result = resolve_user_path("~/versions");
        assert!(result.ends_with("versions"));
    }

    #[test]
    fn resolve_user_path_absolute_is_kept() {
        assert_eq!(resolve_user_path("/var/lib/vercalc"), PathBuf::from("/var/lib/vercalc"));
    }

    #[test]
    fn resolve_user_path_relative() {
        let result = resolve_user_path("tmp/dir");
        assert!(result.is_absolute());
    }
}
