//! Derived catalog keys for freeform swept text.
//!
//! Freeform text has no structured catalog key, so entries are filed under a
//! stable content hash. The hash is the 31-bit rolling hash historically used
//! by the web client, rendered base-36, so overlay keys produced by earlier
//! deployments remain addressable.

/// Derived overlay key for a freeform text (`dom.<hash>`).
#[must_use]
pub fn derived_key(text: &str) -> String {
    format!("dom.{}", short_hash(text))
}

/// 31-bit rolling hash over UTF-16 code units, rendered base-36.
fn short_hash(text: &str) -> String {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    to_base36(hash.unsigned_abs())
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_keys_match_the_historical_hash() {
        // Value checked against the web client's hash of the same string.
        assert_eq!(derived_key("Hello"), "dom.15fz5e");
    }

    #[test]
    fn keys_are_stable_and_distinguish_texts() {
        assert_eq!(derived_key("Total Balance"), derived_key("Total Balance"));
        assert_ne!(derived_key("Total Balance"), derived_key("Total Expense"));
    }

    #[test]
    fn empty_text_hashes_to_zero() {
        assert_eq!(derived_key(""), "dom.0");
    }
}
