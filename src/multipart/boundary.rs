//! Boundary marker and content type resolution.
//!
//! Both scans use exact-case, fixed-offset prefix matching and the first
//! matching line wins.

const BOUNDARY_PREFIX: &str = "--";
const CONTENT_TYPE_PREFIX: &str = "Content-Type:";

/// Return the first line beginning with `--`, verbatim.
pub fn find_boundary<'a>(lines: &[&'a str]) -> Option<&'a str> {
    lines
        .iter()
        .copied()
        .find(|line| line.starts_with(BOUNDARY_PREFIX))
}

/// Return the trimmed value of the first `Content-Type:` line.
pub fn find_content_type(lines: &[&str]) -> Option<String> {
    lines.iter().find_map(|line| {
        line.strip_prefix(CONTENT_TYPE_PREFIX)
            .map(|value| value.trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_boundary_wins() {
        let lines = ["", "--AAA", "--BBB"];
        assert_eq!(find_boundary(&lines), Some("--AAA"));
    }

    #[test]
    fn test_boundary_requires_line_prefix() {
        let lines = ["x--AAA", "-A", "Content-Type: a"];
        assert_eq!(find_boundary(&lines), None);
    }

    #[test]
    fn test_content_type_trimmed() {
        let lines = ["--AAA", "Content-Type: \t image/jp2  "];
        assert_eq!(find_content_type(&lines).as_deref(), Some("image/jp2"));
    }

    #[test]
    fn test_content_type_without_space() {
        let lines = ["Content-Type:application/octet-stream"];
        assert_eq!(
            find_content_type(&lines).as_deref(),
            Some("application/octet-stream")
        );
    }

    #[test]
    fn test_content_type_is_case_sensitive() {
        let lines = ["content-type: image/jp2", "CONTENT-TYPE: image/jp2"];
        assert_eq!(find_content_type(&lines), None);
    }

    #[test]
    fn test_first_content_type_wins() {
        let lines = ["Content-Type: a", "Content-Type: b"];
        assert_eq!(find_content_type(&lines).as_deref(), Some("a"));
    }

    #[test]
    fn test_content_type_keeps_parameters() {
        let lines = ["Content-Type: application/octet-stream; transfer-syntax=*"];
        assert_eq!(
            find_content_type(&lines).as_deref(),
            Some("application/octet-stream; transfer-syntax=*")
        );
    }
}
