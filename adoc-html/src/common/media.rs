//! Media target resolution.

use crate::common::subs::SubstitutionContext;
use url::Url;

/// Resolve an image/audio target against the `imagesdir` attribute.
///
/// Absolute URIs and absolute paths pass through untouched; everything else
/// is joined below `imagesdir` when the attribute is set.
pub fn resolve_media_target(ctx: &SubstitutionContext, target: &str) -> String {
    if target.is_empty() || target.starts_with('/') || is_uri(target) {
        return target.to_string();
    }
    match ctx.text("imagesdir") {
        Some(dir) if !dir.is_empty() => {
            if dir.ends_with('/') {
                format!("{dir}{target}")
            } else {
                format!("{dir}/{target}")
            }
        }
        _ => target.to_string(),
    }
}

fn is_uri(target: &str) -> bool {
    // Single-letter schemes are Windows drive letters, not URIs.
    match Url::parse(target) {
        Ok(url) => url.scheme().len() > 1,
        Err(_) => false,
    }
}
