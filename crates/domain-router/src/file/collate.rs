/// Locale-style ordering of relative paths
///
/// Approximates the en-US collation file lists are sorted with, so the same
/// tree comes out on every platform regardless of the system locale:
///
/// 1. **Primary**: case-insensitive; whitespace < punctuation < digits < letters
/// 2. **Tertiary**: lowercase before uppercase
/// 3. **Tie-break**: plain byte order
use std::cmp::Ordering;

/// Punctuation and symbols in collation order
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

fn primary_weight(c: char) -> (CharClass, u32) {
    if c.is_whitespace() {
        return (CharClass::Whitespace, c as u32);
    }
    if c.is_ascii_digit() {
        return (CharClass::Digit, c as u32);
    }
    if c.is_ascii_alphabetic() {
        return (CharClass::Letter, c.to_ascii_lowercase() as u32);
    }
    if let Some(rank) = PUNCTUATION_ORDER.find(c) {
        return (CharClass::Punctuation, rank as u32);
    }
    if c.is_alphanumeric() {
        // Non-ASCII letters after the ASCII alphabet
        let lower = c.to_lowercase().next().unwrap_or(c);
        return (CharClass::Letter, 0x100 + lower as u32);
    }
    (CharClass::Punctuation, PUNCTUATION_ORDER.len() as u32 + c as u32)
}

fn tertiary_weight(c: char) -> u8 {
    if c.is_uppercase() {
        1
    } else {
        0
    }
}

/// Compares two relative paths the way sorted scan results are expected
///
/// # Examples
///
/// ```
/// use domain_router::compare_paths;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_paths("[test]/[id].vue", "index.vue"), Ordering::Less);
/// assert_eq!(compare_paths("parent.vue", "parent/child.vue"), Ordering::Less);
/// assert_eq!(compare_paths("about.vue", "Blog.vue"), Ordering::Less);
/// assert_eq!(compare_paths("a.vue", "A.vue"), Ordering::Less);
/// ```
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight))
        .then_with(|| a.chars().map(tertiary_weight).cmp(b.chars().map(tertiary_weight)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut paths: Vec<&str>) -> Vec<&str> {
        paths.sort_by(|a, b| compare_paths(a, b));
        paths
    }

    #[test]
    fn test_brackets_before_letters() {
        assert_eq!(
            sorted(vec!["parent/child.vue", "index.vue", "parent.vue", "[test]/[id].vue"]),
            vec!["[test]/[id].vue", "index.vue", "parent.vue", "parent/child.vue"]
        );
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(
            sorted(vec!["Zeta.vue", "alpha.vue", "Beta.vue"]),
            vec!["alpha.vue", "Beta.vue", "Zeta.vue"]
        );
    }

    #[test]
    fn test_digits_before_letters_no_numeric_collation() {
        assert_eq!(
            sorted(vec!["b.vue", "10.vue", "2.vue"]),
            vec!["10.vue", "2.vue", "b.vue"]
        );
    }

    #[test]
    fn test_underscore_and_dash_before_dot() {
        assert_eq!(
            sorted(vec!["a.vue", "a-b.vue", "a_b.vue"]),
            vec!["a_b.vue", "a-b.vue", "a.vue"]
        );
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_paths("user", "users"), Ordering::Less);
    }

    #[test]
    fn test_identical_is_equal() {
        assert_eq!(compare_paths("a/b.vue", "a/b.vue"), Ordering::Equal);
    }
}
