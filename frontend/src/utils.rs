// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Short form used on video cards, e.g. `1.3M views`.
pub fn format_views(views: u64) -> String {
    if views < 1_000 {
        return format!("{views} views");
    }

    // Round first, then pick the unit, so 999_950 becomes 1M rather than 1000K.
    let tenths_k = rounded_div(views, 100);
    let compact = if tenths_k < 10_000 {
        with_one_decimal(tenths_k, "K")
    } else {
        with_one_decimal(rounded_div(views, 100_000), "M")
    };
    format!("{compact} views")
}

// Half-up division without overflowing near u64::MAX
fn rounded_div(value: u64, divisor: u64) -> u64 {
    value / divisor + u64::from(value % divisor >= divisor - divisor / 2)
}

fn with_one_decimal(tenths: u64, suffix: &str) -> String {
    if tenths % 10 == 0 {
        format!("{}{suffix}", tenths / 10)
    } else {
        format!("{}.{}{suffix}", tenths / 10, tenths % 10)
    }
}
