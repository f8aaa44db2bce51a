//! Resolution of `sources` entries against `sourceRoot` and the map's location.

/// Resolve `source` the way a consumer of the map at `map_url` would.
///
/// `source_root` is prefixed first (with a separating `/`), then relative
/// results are joined onto the directory of `map_url`. Absolute paths and
/// URLs with a scheme are kept as they are, apart from normalization.
pub fn resolve_source(source: &str, source_root: Option<&str>, map_url: &str) -> String {
    let rooted = match source_root {
        Some(root) if !root.is_empty() && !is_absolute(source) => {
            if root.ends_with('/') {
                format!("{}{}", root, source)
            } else {
                format!("{}/{}", root, source)
            }
        }
        _ => source.to_string(),
    };

    if is_absolute(&rooted) {
        return normalize(&rooted);
    }

    let base = match map_url.rfind('/') {
        Some(pos) => &map_url[..=pos],
        None => "",
    };
    normalize(&format!("{}{}", base, rooted))
}

fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || scheme_len(path).is_some()
}

/// Length of a `scheme://` prefix, if any.
fn scheme_len(path: &str) -> Option<usize> {
    let pos = path.find("://")?;
    let scheme = &path[..pos];
    let valid = !scheme.is_empty()
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(pos + 3)
}

/// Collapse `.` and `..` segments, keeping leading `..` on relative paths.
fn normalize(path: &str) -> String {
    let (prefix, rest) = match scheme_len(path) {
        Some(len) => {
            // Keep the host segment out of `..` handling.
            let host_end = path[len..].find('/').map_or(path.len(), |p| len + p);
            path.split_at(host_end)
        }
        None => ("", path),
    };

    let absolute = rest.starts_with('/');
    let trailing_slash = rest.ends_with('/') && rest.len() > 1;
    let mut parts: Vec<&str> = Vec::new();

    for part in rest.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute || !prefix.is_empty() => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let mut out = String::from(prefix);
    if absolute {
        out.push('/');
    }
    out.push_str(&parts.join("/"));
    if trailing_slash && !parts.is_empty() {
        out.push('/');
    }
    out
}
