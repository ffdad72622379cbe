//! Number formatting for INR amounts and counters.

/// Groups digits the Indian way: last three, then pairs (`1,49,900`).
pub fn indian_grouping(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

pub fn inr(value: u64) -> String {
    format!("₹{}", indian_grouping(value))
}

/// Compact form for hero metrics: `12.5L`, `3.2Cr`, `950`.
pub fn compact_indian(value: u64) -> String {
    const LAKH: u64 = 100_000;
    const CRORE: u64 = 10_000_000;
    let scaled = |unit: u64, suffix: &str| {
        let whole = value / unit;
        let tenth = (value % unit) * 10 / unit;
        if tenth == 0 {
            format!("{}{}", whole, suffix)
        } else {
            format!("{}.{}{}", whole, tenth, suffix)
        }
    };
    if value >= CRORE {
        scaled(CRORE, "Cr")
    } else if value >= LAKH {
        scaled(LAKH, "L")
    } else {
        indian_grouping(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_like_indian_numbering() {
        assert_eq!(indian_grouping(0), "0");
        assert_eq!(indian_grouping(999), "999");
        assert_eq!(indian_grouping(1_000), "1,000");
        assert_eq!(indian_grouping(99_999), "99,999");
        assert_eq!(indian_grouping(149_900), "1,49,900");
        assert_eq!(indian_grouping(12_345_678), "1,23,45,678");
        assert_eq!(inr(2_499), "₹2,499");
    }

    #[test]
    fn compact_uses_lakh_and_crore() {
        assert_eq!(compact_indian(950), "950");
        assert_eq!(compact_indian(50_000), "50,000");
        assert_eq!(compact_indian(100_000), "1L");
        assert_eq!(compact_indian(1_250_000), "12.5L");
        assert_eq!(compact_indian(32_000_000), "3.2Cr");
    }
}
