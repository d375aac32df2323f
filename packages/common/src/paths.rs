/// Compute the relative path from one logical asset path to another.
///
/// Paths are `/`-separated and purely logical: no filesystem access, no
/// symlink resolution. Empty and `.` segments are ignored. Used by the
/// export generators to emit portable asset imports.
pub fn relative_path(from: &str, to: &str) -> String {
    let from_parts: Vec<&str> = split_segments(from);
    let to_parts: Vec<&str> = split_segments(to);

    let common = from_parts
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = Vec::new();
    for _ in common..from_parts.len() {
        segments.push("..");
    }
    segments.extend_from_slice(&to_parts[common..]);

    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_paths() {
        assert_eq!(relative_path("assets/css", "assets/js"), "../js");
    }

    #[test]
    fn test_descend_only() {
        assert_eq!(relative_path("dist", "dist/assets/app.css"), "assets/app.css");
    }

    #[test]
    fn test_ascend_only() {
        assert_eq!(relative_path("dist/pages/home", "dist"), "../..");
    }

    #[test]
    fn test_identical_paths() {
        assert_eq!(relative_path("a/b/c", "a/b/c"), ".");
    }

    #[test]
    fn test_dot_and_empty_segments_ignored() {
        assert_eq!(relative_path("./a//b", "a/b/c"), "c");
    }

    #[test]
    fn test_no_common_prefix() {
        assert_eq!(relative_path("one/two", "three"), "../../three");
    }
}
