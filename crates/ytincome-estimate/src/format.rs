//! Number and currency formatting.

/// Formats a count with a compact suffix (e.g., "1.50M", "12.30K").
///
/// Exactly one suffix tier applies; counts below one thousand are printed as is.
/// The scaled value is rounded half up on its exact binary value, so 1125
/// gives "1.13K" while 1,005,000 (1.00499... as a double) gives "1.00M".
///
/// # Example
///
/// ```
/// use ytincome_estimate::format_compact_number;
///
/// assert_eq!(format_compact_number(1_500_000), "1.50M");
/// assert_eq!(format_compact_number(999), "999");
/// ```
#[must_use]
pub fn format_compact_number(n: u64) -> String {
    const THOUSAND: u64 = 1_000;
    const MILLION: u64 = 1_000 * THOUSAND;
    const BILLION: u64 = 1_000 * MILLION;

    let (scale, suffix) = if n >= BILLION {
        (BILLION, "B")
    } else if n >= MILLION {
        (MILLION, "M")
    } else if n >= THOUSAND {
        (THOUSAND, "K")
    } else {
        return n.to_string();
    };

    // Scaled values are at least 1, so 64 fraction digits print them exactly.
    let exact = format!("{:.64}", n as f64 / scale as f64);
    let (whole, fraction) = round_half_up(&exact, 2);
    format!("{whole}.{fraction}{suffix}")
}

/// Formats an integer with comma thousands separators (e.g., "1,234,567").
#[must_use]
pub fn format_grouped(n: u64) -> String {
    group_digits(&n.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Formats a US dollar amount with two fraction digits (e.g., "$1,234.50").
///
/// Rounds half up on the shortest decimal form of `amount`, so 1.005 gives
/// "$1.01". Negative amounts keep their sign even when they round to zero.
///
/// # Example
///
/// ```
/// use ytincome_estimate::format_currency;
///
/// assert_eq!(format_currency(45.5), "$45.50");
/// assert_eq!(format_currency(1234567.891), "$1,234,567.89");
/// ```
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };

    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        return format!("{sign}$\u{221e}");
    }

    // `Display` never uses exponent notation, so this is a plain decimal.
    let shortest = amount.abs().to_string();
    let (whole, cents) = round_half_up(&shortest, 2);
    format!("{sign}${}.{cents}", group_digits(&whole))
}

/// Rounds a non-negative plain decimal string to `digits` fraction digits,
/// ties away from zero. Returns the integer and fraction digits.
fn round_half_up(decimal: &str, digits: usize) -> (String, String) {
    let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));

    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    if fraction.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let whole = kept[..split].iter().map(|&b| char::from(b)).collect();
    let fraction = kept[split..].iter().map(|&b| char::from(b)).collect();
    (whole, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_number() {
        assert_eq!(format_compact_number(0), "0");
        assert_eq!(format_compact_number(999), "999");
        assert_eq!(format_compact_number(1_000), "1.00K");
        assert_eq!(format_compact_number(12_300), "12.30K");
        assert_eq!(format_compact_number(1_500_000), "1.50M");
        assert_eq!(format_compact_number(999_999_999), "1000.00M");
        assert_eq!(format_compact_number(2_750_000_000), "2.75B");
        assert_eq!(format_compact_number(u64::MAX), "18446744073.71B");
    }

    #[test]
    fn test_format_compact_number_ties_round_up() {
        assert_eq!(format_compact_number(1_125), "1.13K");
        assert_eq!(format_compact_number(2_125_000), "2.13M");
        assert_eq!(format_compact_number(1_999_999), "2.00M");
        // 1.005 is stored just below the tie
        assert_eq!(format_compact_number(1_005_000), "1.00M");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(123_456), "123,456");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(45.5), "$45.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1.5), "$1.50");
        assert_eq!(format_currency(547.5), "$547.50");
        assert_eq!(format_currency(2628.0), "$2,628.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-12.3), "-$12.30");
        assert_eq!(format_currency(-0.001), "-$0.00");
        assert_eq!(format_currency(0.995), "$1.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_currency_rounds_shortest_form() {
        assert_eq!(format_currency(1.005), "$1.01");
        assert_eq!(format_currency(2.675), "$2.68");
        assert_eq!(format_currency(0.125), "$0.13");
        assert_eq!(format_currency(1e20), "$100,000,000,000,000,000,000.00");
        assert_eq!(format_currency(f64::INFINITY), "$\u{221e}");
        assert_eq!(format_currency(f64::NAN), "$NaN");
    }
}
