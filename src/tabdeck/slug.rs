//! Identifier generation. Every entity id in a document is a slug derived
//! from its human-readable label, disambiguated against the ids already in
//! use anywhere in the document.

use std::collections::HashSet;

/// Derive a URL-safe slug from a label: lower-case, trim, drop anything that
/// is not alphanumeric/underscore/whitespace/hyphen, then collapse whitespace
/// and hyphen runs into a single hyphen.
pub fn slugify(label: &str) -> String {
    let lowered = label.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut prev_hyphen = false;

    for ch in lowered.trim().chars() {
        let mapped = if ch.is_whitespace() || ch == '-' {
            '-'
        } else if ch.is_alphanumeric() || ch == '_' {
            ch
        } else {
            continue;
        };

        if mapped == '-' {
            if prev_hyphen {
                continue;
            }
            prev_hyphen = true;
        } else {
            prev_hyphen = false;
        }
        slug.push(mapped);
    }

    slug
}

/// Slugify `label` and resolve collisions against `existing` by appending
/// "-2", "-3", ... until an unused candidate is found. Pure: the caller owns
/// the exclusion set and extends it between calls when generating batches.
///
/// A label that slugifies to the empty string still disambiguates ("", "-2",
/// ...); callers always seed with a non-empty label.
pub fn generate_unique_id(label: &str, existing: &HashSet<String>) -> String {
    let base = slugify(label);
    let mut candidate = base.clone();
    let mut counter = 2;

    while existing.contains(&candidate) {
        candidate = format!("{}-{}", base, counter);
        counter += 1;
    }

    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn slugifies_labels() {
        assert_eq!(slugify("My Card!"), "my-card");
        assert_eq!(slugify("  Hello   World  "), "hello-world");
        assert_eq!(slugify("a--b - c"), "a-b-c");
        assert_eq!(slugify("under_score"), "under_score");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn first_candidate_is_the_base_slug() {
        assert_eq!(generate_unique_id("My Card!", &set(&[])), "my-card");
    }

    #[test]
    fn appends_counter_on_collision() {
        assert_eq!(
            generate_unique_id("My Card!", &set(&["my-card"])),
            "my-card-2"
        );
        assert_eq!(
            generate_unique_id("My Card!", &set(&["my-card", "my-card-2"])),
            "my-card-3"
        );
    }

    #[test]
    fn empty_slug_still_disambiguates() {
        assert_eq!(generate_unique_id("!!!", &set(&[])), "");
        assert_eq!(generate_unique_id("!!!", &set(&[""])), "-2");
        assert_eq!(generate_unique_id("!!!", &set(&["", "-2"])), "-3");
    }
}
