//! Setting values and their krb5.conf text form
//!
//! The configuration model stores plain values and uses each type's zero
//! value to mean "not set". [`Unset`] names that convention in one place and
//! [`present`] turns a field into an explicit `Option`.

use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

/// A value type whose zero value means "not set".
pub trait Unset {
    fn is_unset(&self) -> bool;
}

impl Unset for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Unset for Vec<T> {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl Unset for i32 {
    fn is_unset(&self) -> bool {
        *self == 0
    }
}

impl Unset for Duration {
    fn is_unset(&self) -> bool {
        self.is_zero()
    }
}

/// `Some(value)` unless the value is at its "not set" sentinel.
///
/// ```
/// use krb5_conf::present;
///
/// assert_eq!(present(&String::new()), None);
/// assert_eq!(present(&3i32), Some(&3));
/// ```
pub fn present<T: Unset>(value: &T) -> Option<&T> {
    if value.is_unset() { None } else { Some(value) }
}

/// A single setting value, borrowed from the model.
///
/// `Display` produces the right-hand side of a `key = value` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Bool(bool),
    Int(i32),
    Str(&'a str),
    /// Space-separated list (enctype names).
    Words(&'a [String]),
    Duration(Duration),
    /// Comma-separated addresses.
    Addresses(&'a [IpAddr]),
    /// Raw flag bytes, written as `0x` followed by lowercase hex.
    Flags(&'a [u8]),
    /// Comma-separated integers.
    Ints(&'a [i32]),
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Str(v) => f.write_str(v),
            Value::Words(v) => f.write_str(&v.join(" ")),
            Value::Duration(v) => f.write_str(&format_duration(*v)),
            Value::Addresses(v) => write_joined(f, v.iter(), ","),
            Value::Flags(v) => {
                f.write_str("0x")?;
                for byte in v.iter() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            Value::Ints(v) => write_joined(f, v.iter(), ","),
        }
    }
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
    separator: &str,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&i32> for Value<'_> {
    fn from(v: &i32) -> Self {
        Value::Int(*v)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(v: &'a String) -> Self {
        Value::Str(v)
    }
}

impl<'a> From<&'a Vec<String>> for Value<'a> {
    fn from(v: &'a Vec<String>) -> Self {
        Value::Words(v)
    }
}

impl From<&Duration> for Value<'_> {
    fn from(v: &Duration) -> Self {
        Value::Duration(*v)
    }
}

impl<'a> From<&'a Vec<IpAddr>> for Value<'a> {
    fn from(v: &'a Vec<IpAddr>) -> Self {
        Value::Addresses(v)
    }
}

impl<'a> From<&'a Vec<u8>> for Value<'a> {
    fn from(v: &'a Vec<u8>) -> Self {
        Value::Flags(v)
    }
}

impl<'a> From<&'a Vec<i32>> for Value<'a> {
    fn from(v: &'a Vec<i32>) -> Self {
        Value::Ints(v)
    }
}

/// Format a duration the way Go's `time.Duration` prints it.
///
/// Kerberos parsers built on Go read this form back directly:
/// `24h0m0s`, `5m0s`, `1.5s`, `250ms`, `0s`.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{}ns", nanos);
    }
    if nanos < 1_000_000 {
        return format!("{}µs", decimal(nanos, 3));
    }
    if nanos < 1_000_000_000 {
        return format!("{}ms", decimal(nanos, 6));
    }

    let secs = d.as_secs();
    let seconds = decimal(
        u128::from(secs % 60) * 1_000_000_000 + u128::from(d.subsec_nanos()),
        9,
    );
    let minutes = (secs / 60) % 60;
    let hours = secs / 3600;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// `value / 10^scale` in decimal, trailing fractional zeros trimmed.
fn decimal(value: u128, scale: u32) -> String {
    let unit = 10u128.pow(scale);
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0width$}", frac, width = scale as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}
