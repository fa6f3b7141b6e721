use std::cmp::Ordering;

/// Compare two strings the way a human-facing sorted list expects.
///
/// Primary level: whitespace and punctuation sort before digits, digits before
/// letters, and letters compare case-insensitively. Ties are broken with
/// lowercase before uppercase at the first differing position, then by the raw
/// strings so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_keys(a)
        .cmp(primary_keys(b))
        .then_with(|| case_cmp(a, b))
        .then_with(|| a.cmp(b))
}

fn primary_keys(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.chars().flat_map(|c| {
        let class = if c.is_alphabetic() {
            2
        } else if c.is_numeric() {
            1
        } else {
            0
        };
        c.to_lowercase().map(move |lower| (class, lower))
    })
}

fn case_cmp(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
