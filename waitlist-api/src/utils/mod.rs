// Utility functions for waitlist input handling

/// Highest price per scan a signup may quote, in cents.
pub const MAX_PRICE_CENTS: u32 = 1000 * 100;

const MAX_PRICE_LEN: usize = 20;

/// Parse a dollar amount such as `"12"`, `"0.5"` or `"999.99"` into cents.
///
/// Accepts `digits[.d{1,2}]` only and never goes through floating point.
/// The error is the message shown to the person signing up.
pub fn parse_usd_cents(input: &str) -> Result<u32, &'static str> {
    if input.is_empty() {
        return Err("Please enter a price.");
    }
    if input.len() > MAX_PRICE_LEN {
        return Err("Amount is too long.");
    }

    let (whole, fraction) = match input.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (input, ""),
    };
    let well_formed = !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && (input.contains('.') == !fraction.is_empty())
        && fraction.len() <= 2
        && fraction.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return Err("Enter a valid amount.");
    }

    let whole = whole.trim_start_matches('0');
    if whole.len() > 4 {
        return Err("Amount seems too high.");
    }
    let dollars: u32 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| "Enter a valid amount.")?
    };
    let cents: u32 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u32>().map_err(|_| "Enter a valid amount.")? * 10,
        _ => fraction.parse().map_err(|_| "Enter a valid amount.")?,
    };

    let total = dollars * 100 + cents;
    if total > MAX_PRICE_CENTS {
        return Err("Amount seems too high.");
    }
    Ok(total)
}
