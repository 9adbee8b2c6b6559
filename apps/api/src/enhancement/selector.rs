//! Deterministic Selector — maps a text key onto a pool position.
//!
//! The index is `(sum of the text's Unicode code points) mod pool_size`.
//! This formula is part of the public contract: it must never depend on a
//! seeded hasher, so the same key picks the same phrase in every process.

use crate::enhancement::EnhanceError;

/// Returns the pool position for `text` in a pool of `pool_size` phrases.
///
/// `pool_size` must be non-zero; use [`pick`] when the pool may be empty.
pub fn select(text: &str, pool_size: usize) -> usize {
    debug_assert!(pool_size > 0, "select called with an empty pool");
    let sum: u64 = text.chars().map(|c| u64::from(u32::from(c))).sum();
    (sum % pool_size as u64) as usize
}

/// Picks the phrase for `key` from `pool`, failing instead of dividing by zero.
pub fn pick<'a>(pool_name: &str, pool: &'a [String], key: &str) -> Result<&'a str, EnhanceError> {
    if pool.is_empty() {
        return Err(EnhanceError::EmptyPool(pool_name.to_string()));
    }
    Ok(pool[select(key, pool.len())].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_point_sum(s: &str) -> u64 {
        s.chars().map(|c| c as u64).sum()
    }

    #[test]
    fn test_select_is_code_point_sum_mod_size() {
        for text in ["test", "built a new pipeline", "MBA Finance", "Go", ""] {
            for size in 1..=12 {
                assert_eq!(
                    select(text, size) as u64,
                    code_point_sum(text) % size as u64,
                    "select({text:?}, {size})"
                );
            }
        }
    }

    #[test]
    fn test_select_known_values() {
        assert_eq!(select("test", 5), 3); // 448
        assert_eq!(select("built a new pipeline", 10), 1); // 1921
        assert_eq!(select("MBA Finance", 5), 2); // 932
    }

    #[test]
    fn test_select_counts_code_points_not_bytes() {
        // 'é' is U+00E9 (233) but two bytes in UTF-8
        assert_eq!(select("é", 1000), 233);
        assert_eq!(select("€", 10_000), 0x20AC);
    }

    #[test]
    fn test_empty_text_selects_first() {
        assert_eq!(select("", 7), 0);
    }

    #[test]
    fn test_pick_returns_indexed_phrase() {
        let pool: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        // "Go" = 182, 182 % 3 = 2
        assert_eq!(pick("letters", &pool, "Go").unwrap(), "c");
    }

    #[test]
    fn test_pick_empty_pool_is_an_error() {
        let err = pick("metrics", &[], "anything").unwrap_err();
        assert_eq!(err, EnhanceError::EmptyPool("metrics".to_string()));
    }
}
