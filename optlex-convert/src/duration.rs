//! Durations written as a sequence of numbers with units, like `300ms`, `1.5h` or `2h45m`.

use core::time::Duration;

use crate::Error;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

// Fraction digits beyond this cannot change the result by a nanosecond.
const FRACTION_DIGITS_MAX: usize = 18;

/// Parse a duration.
///
/// A duration is an optionally signed sequence of decimal numbers, each with an optional fraction
/// and a mandatory unit suffix. Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. A
/// lone `0` needs no unit. Negative durations are rejected, except for zero.
pub fn parse_duration(input: &str) -> Result<Duration, Error> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }

    if rest.is_empty() {
        return Err(Error::InvalidDuration("empty"));
    }

    let mut total: u128 = 0;

    while !rest.is_empty() {
        let (int, after) = split_digits(rest);
        let (frac, after) = match after.strip_prefix('.') {
            Some(after) => split_digits(after),
            None => ("", after),
        };

        if int.is_empty() && frac.is_empty() {
            return Err(Error::InvalidDuration("invalid number"));
        }

        let unit_len = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, after) = after.split_at(unit_len);

        if unit.is_empty() {
            return Err(Error::InvalidDuration("missing unit"));
        }

        let scale = unit_scale(unit).ok_or(Error::InvalidDuration("unknown unit"))?;

        total = total
            .checked_add(component(int, frac, scale)?)
            .ok_or(Error::InvalidDuration("overflow"))?;

        rest = after;
    }

    let nanos = u64::try_from(total).map_err(|_| Error::InvalidDuration("overflow"))?;

    if negative && nanos > 0 {
        return Err(Error::InvalidDuration("negative duration"));
    }

    Ok(Duration::from_nanos(nanos))
}

fn unit_scale(unit: &str) -> Option<u64> {
    let scale = match unit {
        "ns" => NANOSECOND,
        // U+00B5 micro sign and U+03BC greek small letter mu.
        "us" | "\u{b5}s" | "\u{3bc}s" => MICROSECOND,
        "ms" => MILLISECOND,
        "s" => SECOND,
        "m" => MINUTE,
        "h" => HOUR,
        _ => return None,
    };

    Some(scale)
}

fn split_digits(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());

    input.split_at(end)
}

/// Compute `int.frac * scale` in nanoseconds, truncating below the nanosecond.
fn component(int: &str, frac: &str, scale: u64) -> Result<u128, Error> {
    let overflow = Error::InvalidDuration("overflow");

    let mut value: u128 = 0;
    for digit in int.bytes() {
        value = value * 10 + u128::from(digit - b'0');

        if value > u128::from(u64::MAX) {
            return Err(overflow);
        }
    }

    let mut fraction: u128 = 0;
    let mut denominator: u128 = 1;
    for digit in frac.bytes().take(FRACTION_DIGITS_MAX) {
        fraction = fraction * 10 + u128::from(digit - b'0');
        denominator *= 10;
    }

    let scale = u128::from(scale);

    value
        .checked_mul(scale)
        .and_then(|v| v.checked_add(fraction * scale / denominator))
        .ok_or(overflow)
}
