//! Natural ("human") string ordering.
//!
//! Embedded digit runs compare by numeric value, so `SET2` sorts before
//! `SET10`. Comparison is byte-wise, which is order-preserving for UTF-8.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use command_syntax_core::natural_cmp;
//!
//! assert_eq!(natural_cmp("SET2", "SET10"), Ordering::Less);
//! assert_eq!(natural_cmp("a01", "a1"), Ordering::Greater);
//!
//! let mut names = vec!["SET10", "SET2", "SET1"];
//! names.sort_by(|a, b| natural_cmp(b, a));
//! assert_eq!(names, vec!["SET10", "SET2", "SET1"]);
//! ```

use std::cmp::Ordering;

/// Compares two strings, treating digit runs as numbers.
///
/// Rules, applied position by position:
/// - a digit sorts before any non-digit;
/// - non-digits compare by byte value;
/// - digit runs compare by significant-digit count, then lexically, then by
///   number of leading zeros (fewer zeros first);
/// - if one string runs out first, it sorts first.
pub fn natural_cmp(left: &str, right: &str) -> Ordering {
    let a = left.as_bytes();
    let b = right.as_bytes();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        let (ca, cb) = (a[i], b[j]);
        let (da, db) = (ca.is_ascii_digit(), cb.is_ascii_digit());

        if da != db {
            return if da { Ordering::Less } else { Ordering::Greater };
        }

        if !da {
            if ca != cb {
                return ca.cmp(&cb);
            }
            i += 1;
            j += 1;
            continue;
        }

        let zeros_a = count_while(&a[i..], |c| c == b'0');
        let zeros_b = count_while(&b[j..], |c| c == b'0');
        i += zeros_a;
        j += zeros_b;

        let digits_a = count_while(&a[i..], |c| c.is_ascii_digit());
        let digits_b = count_while(&b[j..], |c| c.is_ascii_digit());
        let run_a = &a[i..i + digits_a];
        let run_b = &b[j..j + digits_b];
        i += digits_a;
        j += digits_b;

        let ordering = digits_a
            .cmp(&digits_b)
            .then_with(|| run_a.cmp(run_b))
            .then_with(|| zeros_a.cmp(&zeros_b));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// Returns `true` if `left` sorts strictly before `right`.
pub fn natural_less(left: &str, right: &str) -> bool {
    natural_cmp(left, right) == Ordering::Less
}

fn count_while(bytes: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|&&c| pred(c)).count()
}
