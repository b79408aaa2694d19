//! Base-slug derivation, canonical normalization, and the variant table
//!
//! Variant construction is a flat table of generator functions applied
//! uniformly and unioned into a set. Supporting a new lookup format is one
//! new row, not a new branch at every call site.

use std::collections::BTreeSet;

/// Marker prefix for roadmap identifiers (`comingsoon-<slug>` and friends).
pub const COMING_SOON_PREFIX: &str = "comingsoon-";

/// One row of the variant table: base slug + version in, variant out.
/// `None` means the row does not apply (e.g. the record has no version).
type VariantFn = fn(&str, &str) -> Option<String>;

/// Variant table shared by released and planned records.
///
/// Rows: the base slug alone; base + raw version; base + version with a
/// forced leading `v`; base + version lowercased with dots as hyphens.
const VARIANT_TABLE: &[VariantFn] = &[
    |base, _| Some(base.to_string()),
    |base, version| join(base, version),
    |base, version| join(base, &forced_v(version)),
    |base, version| join(base, &version.to_lowercase().replace('.', "-")),
];

/// Canonical form used for all variant equality checks: lowercase, with
/// every character outside `[a-z0-9-]` replaced by `-`.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '-',
        })
        .collect()
}

/// Derives the base slug for a record.
///
/// The explicit `slug` field wins when present. Otherwise the slug is
/// derived from the title: lowercase, characters outside
/// `[a-z0-9 \t-]` removed, whitespace runs collapsed to single hyphens.
/// A record with neither slug nor title derives the empty base.
pub fn derive_base_slug(slug: Option<&str>, title: Option<&str>) -> String {
    if let Some(s) = slug {
        if !s.is_empty() {
            return s.to_string();
        }
    }

    let title = title.unwrap_or("");
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-') || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Generates the full lookup-variant set for one record.
///
/// Planned records get every table row twice: once plain, once behind the
/// `comingsoon-` marker. The result is a sorted set, so iteration order is
/// deterministic.
pub fn variant_set(base: &str, version: &str, planned: bool) -> BTreeSet<String> {
    let mut out = BTreeSet::new();

    for row in VARIANT_TABLE {
        if let Some(variant) = row(base, version) {
            if planned {
                out.insert(format!("{}{}", COMING_SOON_PREFIX, variant));
            }
            out.insert(variant);
        }
    }

    out
}

/// `base-version` composite; versionless records contribute no composites.
fn join(base: &str, version: &str) -> Option<String> {
    if version.is_empty() {
        None
    } else {
        Some(format!("{}-{}", base, version))
    }
}

/// Version with exactly one leading `v` (an existing `v`/`V` is replaced).
fn forced_v(version: &str) -> String {
    let bare = version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version);
    format!("v{}", bare)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_collapses_to_hyphen() {
        assert_eq!(normalize("API Guide v2.1!"), "api-guide-v2-1-");
        assert_eq!(normalize("already-normal-9"), "already-normal-9");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_base_slug_prefers_explicit_slug() {
        assert_eq!(
            derive_base_slug(Some("getting-started"), Some("Ignored Title")),
            "getting-started"
        );
    }

    #[test]
    fn test_base_slug_empty_slug_falls_back_to_title() {
        assert_eq!(
            derive_base_slug(Some(""), Some("Getting Started")),
            "getting-started"
        );
    }

    #[test]
    fn test_base_slug_from_title_strips_and_collapses() {
        assert_eq!(
            derive_base_slug(None, Some("  API  Reference (v2)!  ")),
            "api-reference-v2"
        );
    }

    #[test]
    fn test_base_slug_missing_everything_is_empty() {
        assert_eq!(derive_base_slug(None, None), "");
    }

    #[test]
    fn test_variant_set_released() {
        let set = variant_set("guide", "v1.2.0", false);
        let expected: Vec<&str> =
            vec!["guide", "guide-v1-2-0", "guide-v1.2.0"];
        assert_eq!(set.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_variant_set_forces_v_prefix() {
        let set = variant_set("guide", "1.2.0", false);
        assert!(set.contains("guide-1.2.0"));
        assert!(set.contains("guide-v1.2.0"));
        assert!(set.contains("guide-1-2-0"));
    }

    #[test]
    fn test_variant_set_planned_adds_comingsoon_forms() {
        let set = variant_set("ai-chat", "v3.0.0", true);
        assert!(set.contains("ai-chat"));
        assert!(set.contains("comingsoon-ai-chat"));
        assert!(set.contains("comingsoon-ai-chat-v3.0.0"));
        assert!(set.contains("comingsoon-ai-chat-v3-0-0"));
    }

    #[test]
    fn test_variant_set_versionless_has_no_composites() {
        let set = variant_set("guide", "", false);
        assert_eq!(set.iter().map(String::as_str).collect::<Vec<_>>(), ["guide"]);
    }
}
