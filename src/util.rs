use std::env;
use std::path::{Path, PathBuf};

pub(crate) fn env_optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Ensure a player tag carries its leading `#`. Accepts already-encoded
/// `%23...` input as well.
pub(crate) fn normalize_tag(tag: &str) -> String {
    let trimmed = tag.trim();
    if let Some(rest) = trimmed.strip_prefix("%23") {
        format!("#{rest}")
    } else if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    }
}

/// Filename-safe form of a tag: `#` / `%23` stripped.
pub(crate) fn tag_slug(tag: &str) -> String {
    tag.trim().replace("%23", "").replace('#', "")
}

pub(crate) fn encode_tag(tag: &str) -> String {
    urlencoding::encode(&normalize_tag(tag)).into_owned()
}

pub(crate) fn default_output(prefix: &str, tag: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}_{}.json", tag_slug(tag)))
}

pub(crate) fn write_pretty_json(
    path: &Path,
    value: &serde_json::Value,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut payload = serde_json::to_string_pretty(value)?;
    payload.push('\n');
    std::fs::write(path, payload)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_tag_adds_hash() {
        assert_eq!(normalize_tag("9VVPG29"), "#9VVPG29");
    }

    #[test]
    fn normalize_tag_keeps_hash() {
        assert_eq!(normalize_tag("#9VVPG29"), "#9VVPG29");
    }

    #[test]
    fn normalize_tag_decodes_percent_form() {
        assert_eq!(normalize_tag("%239VVPG29"), "#9VVPG29");
    }

    #[test]
    fn tag_slug_strips_prefixes() {
        assert_eq!(tag_slug("#9VVPG29"), "9VVPG29");
        assert_eq!(tag_slug("%239VVPG29"), "9VVPG29");
        assert_eq!(tag_slug("9VVPG29"), "9VVPG29");
    }

    #[test]
    fn encode_tag_percent_encodes_hash() {
        assert_eq!(encode_tag("#9VVPG29"), "%239VVPG29");
        assert_eq!(encode_tag("9VVPG29"), "%239VVPG29");
    }

    #[test]
    fn default_output_uses_slug() {
        assert_eq!(
            default_output("player", "#9VVPG29"),
            PathBuf::from("player_9VVPG29.json")
        );
    }
}
