//! Tracker data set → AdGuard rules.
//!
//! AdGuard's `||domain^` blocks the domain and every subdomain. Only entries whose
//! `default` action is exactly `"block"` are emitted.

mod header;

pub use header::{render_header, HEADER_LINES, TIMESTAMP_FORMAT};

use crate::dataset::{TrackerDataset, TrackerEntry};

/// The only `default` value that selects an entry. Compared case-sensitively.
pub const BLOCK_ACTION: &str = "block";

/// Formats one domain as an AdGuard domain-block rule.
pub fn block_rule(domain: &str) -> String {
    format!("||{}^", domain)
}

fn is_blocked(entry: &TrackerEntry) -> bool {
    entry.default.as_deref() == Some(BLOCK_ACTION)
}

/// A key can only become a rule if it cannot break the `||domain^` shape or the
/// one-rule-per-line layout: non-empty, no `|` or `^`, no whitespace or control characters.
pub fn is_rule_safe_domain(domain: &str) -> bool {
    !domain.is_empty()
        && !domain
            .chars()
            .any(|c| c == '|' || c == '^' || c.is_whitespace() || c.is_control())
}

/// Rules for every tracker marked `"block"`, ascending by domain.
///
/// Keys that fail [`is_rule_safe_domain`] are skipped.
pub fn to_block_rules(dataset: &TrackerDataset) -> Vec<String> {
    // BTreeMap iteration is already sorted by key.
    dataset
        .trackers
        .iter()
        .filter(|(_, entry)| is_blocked(entry))
        .filter(|(domain, _)| {
            let safe = is_rule_safe_domain(domain);
            if !safe {
                tracing::debug!(domain = ?domain, "skipping malformed tracker domain");
            }
            safe
        })
        .map(|(domain, _)| block_rule(domain))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset(doc: serde_json::Value) -> TrackerDataset {
        TrackerDataset::from_value(&doc)
    }

    #[test]
    fn selects_block_entries_sorted() {
        let ds = dataset(json!({
            "trackers": {
                "b.example.com": { "default": "block" },
                "a.example.com": { "default": "ignore" },
                "c.example.com": { "default": "block" }
            },
            "version": "42"
        }));
        assert_eq!(
            to_block_rules(&ds),
            vec!["||b.example.com^".to_string(), "||c.example.com^".to_string()]
        );
    }

    #[test]
    fn empty_mapping_yields_no_rules() {
        assert!(to_block_rules(&dataset(json!({ "trackers": {} }))).is_empty());
        assert!(to_block_rules(&dataset(json!({}))).is_empty());
    }

    #[test]
    fn missing_default_is_excluded() {
        let ds = dataset(json!({
            "trackers": {
                "a.example.com": { "owner": { "name": "A" } },
                "b.example.com": { "default": "block" }
            }
        }));
        assert_eq!(to_block_rules(&ds), vec!["||b.example.com^".to_string()]);
    }

    #[test]
    fn only_exact_block_matches() {
        let ds = dataset(json!({
            "trackers": {
                "a.com": { "default": "Block" },
                "b.com": { "default": "block-cname" },
                "c.com": { "default": "BLOCK" },
                "d.com": { "default": " block" },
                "e.com": { "default": "block" }
            }
        }));
        assert_eq!(to_block_rules(&ds), vec!["||e.com^".to_string()]);
    }

    #[test]
    fn ordering_is_bytewise_not_case_insensitive() {
        let ds = dataset(json!({
            "trackers": {
                "b.com": { "default": "block" },
                "A.com": { "default": "block" },
                "a.com": { "default": "block" },
                "_x.com": { "default": "block" }
            }
        }));
        // 'A' (0x41) < '_' (0x5f) < 'a' (0x61) < 'b'
        assert_eq!(
            to_block_rules(&ds),
            vec!["||A.com^", "||_x.com^", "||a.com^", "||b.com^"]
        );
    }

    #[test]
    fn rules_match_adguard_domain_syntax() {
        let ds = dataset(json!({
            "trackers": {
                "x.example.net": { "default": "block" },
                "y.example.org": { "default": "block" },
                "z.example.io": { "default": "ignore" },
                "": { "default": "block" },
                "a^b.com": { "default": "block" },
                "c|d.com": { "default": "block" },
                "evil.com^\n@@||good.com": { "default": "block" },
                "cr.com\r": { "default": "block" },
                "sp ace.com": { "default": "block" },
                "tab\t.com": { "default": "block" }
            }
        }));
        let rules = to_block_rules(&ds);
        assert_eq!(rules, vec!["||x.example.net^", "||y.example.org^"]);
        for rule in &rules {
            let domain = rule
                .strip_prefix("||")
                .and_then(|r| r.strip_suffix('^'))
                .expect("rule shape");
            assert!(!domain.is_empty());
            assert!(!domain.contains('|') && !domain.contains('^'));
            assert!(!rule.contains('\n') && !rule.contains('\r'));
        }
    }

    #[test]
    fn rule_safe_domain_checks() {
        assert!(is_rule_safe_domain("tracker.example.com"));
        assert!(is_rule_safe_domain("xn--bcher-kva.example"));
        assert!(!is_rule_safe_domain(""));
        assert!(!is_rule_safe_domain("a^b.com"));
        assert!(!is_rule_safe_domain("a|b.com"));
        assert!(!is_rule_safe_domain("a.com\n"));
        assert!(!is_rule_safe_domain("a .com"));
        assert!(!is_rule_safe_domain("a\u{0}.com"));
    }

    #[test]
    fn output_is_sorted_and_unique() {
        let mut trackers = serde_json::Map::new();
        for i in (0..50).rev() {
            let action = if i % 3 == 0 { "ignore" } else { "block" };
            trackers.insert(format!("t{:02}.example.com", i), json!({ "default": action }));
        }
        let ds = dataset(json!({ "trackers": trackers }));
        let rules = to_block_rules(&ds);
        let mut sorted = rules.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(rules, sorted);
        assert_eq!(rules.len(), 50 - 17);
    }
}
