//! Deletion-neighborhood enumeration for the symmetric-delete technique.
//!
//! `enumerate` walks the deletion tree depth-first, memoizing already-seen
//! edits in the output set so no sub-tree is explored twice. Order of the
//! returned keys is generation order (word itself first, depth 1 next, and
//! so on); the corrector does not rely on this order for ranking — distance,
//! frequency and, finally, the word itself are the full ranking key (see
//! `suggestion::rank_key`).

/// Enumerate the deletion-edit keys of `word` up to `depth` deletions.
///
/// `build_max_edit_distance` controls whether the empty string is a valid
/// key (it is, iff `word.chars().count() <= build_max_edit_distance`,
/// independent of `depth`, per the contract in spec §4.1).
///
/// `prefix_cap`, when `Some(p)` with `p > 0` and the word longer than `p`
/// code units, truncates the word to its first `p` code units *before*
/// deletion enumeration; the untruncated word itself is still included as
/// a key (truncate-then-enumerate, per the resolved open question in
/// SPEC_FULL.md).
pub fn enumerate(
    word: &str,
    depth: usize,
    build_max_edit_distance: usize,
    prefix_cap: Option<usize>,
) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut keys: Vec<String> = Vec::new();
    let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();

    let mut push = |keys: &mut Vec<String>, seen: &mut std::collections::HashSet<String>, s: String| {
        if seen.insert(s.clone()) {
            keys.push(s);
        }
    };

    push(&mut keys, &mut seen, word.to_string());

    if chars.len() <= build_max_edit_distance {
        push(&mut keys, &mut seen, String::new());
    }

    let truncated: Vec<char> = match prefix_cap {
        Some(p) if p > 0 && chars.len() > p => chars[..p].to_vec(),
        _ => chars,
    };

    enumerate_deletions(&truncated, depth, &mut keys, &mut seen);

    keys
}

/// Depth-first walk of the deletion tree rooted at `chars`, emitting every
/// string reachable by 1..=depth deletions, each exactly once.
fn enumerate_deletions(
    chars: &[char],
    depth: usize,
    keys: &mut Vec<String>,
    seen: &mut std::collections::HashSet<String>,
) {
    if depth == 0 || chars.is_empty() {
        return;
    }
    for i in 0..chars.len() {
        let mut shorter = Vec::with_capacity(chars.len() - 1);
        shorter.extend_from_slice(&chars[..i]);
        shorter.extend_from_slice(&chars[i + 1..]);
        let s: String = shorter.iter().collect();
        if seen.insert(s.clone()) {
            keys.push(s);
            enumerate_deletions(&shorter, depth - 1, keys, seen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_word_itself() {
        let keys = enumerate("abc", 2, 2, None);
        assert!(keys.contains(&"abc".to_string()));
    }

    #[test]
    fn empty_key_when_short_enough() {
        let keys = enumerate("ab", 2, 2, None);
        assert!(keys.contains(&"".to_string()));
    }

    #[test]
    fn no_empty_key_when_too_long() {
        let keys = enumerate("abcde", 2, 2, None);
        assert!(!keys.contains(&"".to_string()));
    }

    #[test]
    fn depth_zero_yields_only_word_and_maybe_empty() {
        let keys = enumerate("abc", 0, 2, None);
        assert_eq!(keys, vec!["abc".to_string()]);
    }

    #[test]
    fn exhaustive_depth_two() {
        let keys = enumerate("abc", 2, 0, None);
        for s in ["ab", "ac", "bc", "a", "b", "c"] {
            assert!(keys.contains(&s.to_string()), "missing {s}");
        }
        assert_eq!(keys.len(), 1 + 3 + 3); // abc + 3 singles-removed + 3 pairs-removed
    }

    #[test]
    fn no_duplicates() {
        let keys = enumerate("aaa", 2, 0, None);
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn prefix_cap_truncates_but_keeps_full_word() {
        let keys = enumerate("abcdefgh", 1, 0, Some(4));
        assert!(keys.contains(&"abcdefgh".to_string()));
        // depth-1 deletions are computed against the truncated prefix "abcd"
        assert!(keys.contains(&"bcd".to_string()));
        assert!(!keys.contains(&"abcdefg".to_string()));
    }

    #[test]
    fn prefix_cap_noop_when_under_cap() {
        let capped = enumerate("ab", 1, 0, Some(7));
        let uncapped = enumerate("ab", 1, 0, None);
        assert_eq!(capped, uncapped);
    }

    #[test]
    fn generation_order_word_first() {
        let keys = enumerate("abc", 2, 0, None);
        assert_eq!(keys[0], "abc");
    }
}
