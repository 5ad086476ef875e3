//! Canonical serialization of an option set into the options path.
//!
//! Emission happens in two passes. The first walks the option table in
//! canonical order, matching entries by long name first and short code
//! second. The second emits whatever keys remain, sorted, with long names
//! rewritten to their short codes when the table knows them. The result is
//! insertion-order independent: any two option sets with the same contents
//! serialize to the same path.

use crate::registry::{short_code_for, OPTIONS};
use crate::OptionSet;

/// Serialize an option set into the `/short:value/.../` path string.
///
/// The set is drained as a side effect: every entry matched during the table
/// pass is removed under both its long and short key, and the leftover pass
/// consumes the rest. Callers must re-populate the set before serializing
/// again; this mirrors the one-shot contract of [`crate::UrlBuilder::generate`].
///
/// The returned string always carries a leading `/` and a trailing `/`, so
/// the encoded source can be appended directly.
///
/// # Examples
///
/// ```
/// use imgproxy_url::{serialize_options, OptionSet};
///
/// let mut options = OptionSet::new();
/// options.insert("height".to_string(), "50".to_string());
/// options.insert("width".to_string(), "100".to_string());
///
/// // width precedes height in the canonical table, insertion order ignored
/// assert_eq!(serialize_options(&mut options), "/w:100/h:50/");
/// assert!(options.is_empty());
/// ```
pub fn serialize_options(options: &mut OptionSet) -> String {
    let mut path = String::from("/");

    for descriptor in OPTIONS {
        // An explicitly-set empty string does not match here; it falls
        // through to the alternate alias and, failing that, survives into
        // the leftover pass.
        let value = options
            .get(descriptor.long)
            .filter(|v| !v.is_empty())
            .or_else(|| options.get(descriptor.short).filter(|v| !v.is_empty()))
            .cloned();

        let Some(value) = value else {
            continue;
        };

        path.push_str(descriptor.short);
        path.push(':');
        path.push_str(&value);
        path.push('/');

        options.remove(descriptor.long);
        options.remove(descriptor.short);
    }

    // Leftover pass: BTreeMap iteration is already lexicographic byte order.
    // Unlike the table pass, explicit empty values are emitted verbatim.
    for (key, value) in std::mem::take(options) {
        let emitted = match short_code_for(&key) {
            Some(short) => short,
            None => key.as_str(),
        };

        path.push_str(emitted);
        path.push(':');
        path.push_str(&value);
        path.push('/');
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(pairs: &[(&str, &str)]) -> OptionSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_set_serializes_to_slash() {
        let mut options = OptionSet::new();
        assert_eq!(serialize_options(&mut options), "/");
    }

    #[test]
    fn test_canonical_order_ignores_insertion_order() {
        let mut forward = set_of(&[("width", "100"), ("height", "50")]);
        let mut reverse = set_of(&[("height", "50"), ("width", "100")]);

        assert_eq!(serialize_options(&mut forward), "/w:100/h:50/");
        assert_eq!(serialize_options(&mut reverse), "/w:100/h:50/");
    }

    #[test]
    fn test_short_and_long_keys_are_equivalent() {
        let mut by_long = set_of(&[("quality", "80")]);
        let mut by_short = set_of(&[("q", "80")]);

        assert_eq!(serialize_options(&mut by_long), "/q:80/");
        assert_eq!(serialize_options(&mut by_short), "/q:80/");
    }

    #[test]
    fn test_long_name_wins_over_short_code() {
        let mut options = set_of(&[("width", "100"), ("w", "999")]);

        // Long name is looked up first; both keys are consumed.
        assert_eq!(serialize_options(&mut options), "/w:100/");
        assert!(options.is_empty());
    }

    #[test]
    fn test_empty_value_falls_through_to_short_code() {
        let mut options = set_of(&[("width", ""), ("w", "42")]);
        assert_eq!(serialize_options(&mut options), "/w:42/");
    }

    #[test]
    fn test_leftovers_sorted_after_known_options() {
        let mut options = set_of(&[("customtag", "abc"), ("width", "10"), ("aaa", "1")]);
        assert_eq!(serialize_options(&mut options), "/w:10/aaa:1/customtag:abc/");
    }

    #[test]
    fn test_leftover_long_name_resolves_to_short_code() {
        // An option whose value is empty under both aliases skips the table
        // pass, but the leftover pass still rewrites the long name.
        let mut options = set_of(&[("width", "")]);
        assert_eq!(serialize_options(&mut options), "/w:/");
    }

    #[test]
    fn test_leftover_unknown_key_emitted_verbatim() {
        let mut options = set_of(&[("x-trace", "on")]);
        assert_eq!(serialize_options(&mut options), "/x-trace:on/");
    }

    #[test]
    fn test_set_is_drained() {
        let mut options = set_of(&[("width", "10"), ("customtag", "abc")]);
        serialize_options(&mut options);
        assert!(options.is_empty());

        // A second call on the drained set yields the empty path.
        assert_eq!(serialize_options(&mut options), "/");
    }
}
