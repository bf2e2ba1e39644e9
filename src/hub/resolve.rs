use std::path::PathBuf;

/// Resolve the destination directory for a download.
///
/// An explicit destination wins. Otherwise the directory is derived from the
/// last path segment of the source reference: URL-form inputs go through a
/// proper URL parse, plain repo ids (`org/name`) are split on `/`. The source
/// reference itself is never validated; whatever it is, it reaches the
/// downloader verbatim.
pub fn resolve_dest(source: &str, dest: Option<&str>) -> PathBuf {
    if let Some(dest) = dest {
        return PathBuf::from(dest);
    }

    PathBuf::from(last_segment(source))
}

fn last_segment(source: &str) -> String {
    if source.starts_with("http://") || source.starts_with("https://") {
        if let Some(segment) = last_url_segment(source) {
            return segment;
        }
    }

    source
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(source)
        .to_string()
}

fn last_url_segment(source: &str) -> Option<String> {
    let url = url::Url::parse(source).ok()?;
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dest_wins() {
        let dest = resolve_dest("org/model", Some("models/here"));
        assert_eq!(dest, PathBuf::from("models/here"));
    }

    #[test]
    fn repo_id_uses_name_segment() {
        assert_eq!(resolve_dest("org/model", None), PathBuf::from("model"));
    }

    #[test]
    fn bare_name_is_its_own_dest() {
        assert_eq!(resolve_dest("model", None), PathBuf::from("model"));
    }

    #[test]
    fn url_uses_last_path_segment() {
        assert_eq!(
            resolve_dest("https://huggingface.co/org/model", None),
            PathBuf::from("model")
        );
    }

    #[test]
    fn url_trailing_slash_is_ignored() {
        assert_eq!(
            resolve_dest("https://huggingface.co/org/model/", None),
            PathBuf::from("model")
        );
    }

    #[test]
    fn repo_id_trailing_slash_is_ignored() {
        assert_eq!(resolve_dest("org/model/", None), PathBuf::from("model"));
    }
}
