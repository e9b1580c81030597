use std::fmt;

/// Number of countries to display, always within `Count::MIN..=Count::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count(u8);

impl Count {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Returns `None` when `value` is out of range.
    pub fn new(value: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Applies one edit of the count input.
///
/// An empty string clears the count. Otherwise the leading integer is read
/// the way browsers parse integers (leading whitespace, optional sign,
/// digits, trailing characters ignored). Input without digits or out of
/// range leaves `previous` untouched.
pub fn parse_count(raw: &str, previous: Option<Count>) -> Option<Count> {
    if raw.is_empty() {
        return None;
    }
    match parse_leading_int(raw).and_then(Count::new) {
        Some(count) => Some(count),
        None => previous,
    }
}

/// Parses the leading base-10 integer of `raw`.
///
/// Overflow saturates, which keeps huge inputs out of range.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: Option<i64> = None;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit),
        );
    }

    value.map(|value| if negative { -value } else { value })
}
