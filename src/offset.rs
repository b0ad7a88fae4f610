use core::ops::Neg;

use crate::error::Error;

/// The minimum offset in units of seconds, corresponding to `-25:59:59`.
///
/// The range is wider than any offset the IANA database has ever shipped,
/// which keeps this crate agnostic to whatever future datasets contain.
const MIN_SECONDS: i32 = -93_599;

/// The maximum offset in units of seconds, corresponding to `25:59:59`.
const MAX_SECONDS: i32 = 93_599;

/// A fixed offset from UTC.
///
/// Negative offsets correspond to time zones west of the prime meridian,
/// while positive offsets correspond to time zones east of the prime
/// meridian. Equivalently, in all cases, `civil-time - offset = UTC`.
///
/// An offset is the result of a zone lookup: add it to a UTC instant to get
/// the civil time a wall clock in that zone shows.
///
/// # Display format
///
/// This type implements the `core::fmt::Display` trait. It will convert the
/// offset to a string format in the form `{sign}{hours}[:{minutes}[:{seconds}]]`,
/// where `minutes` and `seconds` are only present when non-zero. For example:
///
/// ```
/// use microtz::Offset;
///
/// let o = Offset::constant(-5);
/// assert_eq!(o.to_string(), "-05");
/// let o = Offset::constant_seconds(19_800);
/// assert_eq!(o.to_string(), "+05:30");
/// let o = Offset::constant_seconds(-18_062);
/// assert_eq!(o.to_string(), "-05:01:02");
/// let o = Offset::UTC;
/// assert_eq!(o.to_string(), "+00");
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Offset {
    seconds: i32,
}

impl Offset {
    /// The minimum possible offset, corresponding to `-25:59:59`.
    pub const MIN: Offset = Offset { seconds: MIN_SECONDS };

    /// The maximum possible offset, corresponding to `25:59:59`.
    pub const MAX: Offset = Offset { seconds: MAX_SECONDS };

    /// The offset corresponding to UTC. That is, no offset at all.
    pub const UTC: Offset = Offset { seconds: 0 };

    /// Creates a new offset in a `const` context from a given number of
    /// hours.
    ///
    /// The fallible non-const version of this constructor is
    /// [`Offset::new`].
    ///
    /// # Panics
    ///
    /// When the given number of hours is out of range. Namely, `hours` must
    /// be in the range `-25..=25`.
    ///
    /// # Example
    ///
    /// ```
    /// use microtz::Offset;
    ///
    /// let o = Offset::constant(-6);
    /// assert_eq!(o.seconds(), -21_600);
    /// ```
    #[inline]
    pub const fn constant(hours: i8) -> Offset {
        if hours < -25 || hours > 25 {
            panic!("invalid offset hours");
        }
        Offset::constant_seconds(hours as i32 * 3_600)
    }

    /// Creates a new offset in a `const` context from a given number of
    /// seconds.
    ///
    /// The fallible non-const version of this constructor is
    /// [`Offset::new_seconds`].
    ///
    /// # Panics
    ///
    /// When the given number of seconds is out of range. The range
    /// corresponds to the offsets `-25:59:59..=25:59:59`, or in units of
    /// seconds, `-93,599..=93,599`.
    #[inline]
    pub const fn constant_seconds(seconds: i32) -> Offset {
        if seconds < MIN_SECONDS || seconds > MAX_SECONDS {
            panic!("invalid offset seconds");
        }
        Offset { seconds }
    }

    /// Creates a new offset from a given number of hours.
    ///
    /// # Errors
    ///
    /// When the given number of hours is out of range. Namely, `hours` must
    /// be in the range `-25..=25`.
    #[inline]
    pub fn new(hours: i8) -> Result<Offset, Error> {
        if !(-25..=25).contains(&hours) {
            return Err(Error::range("offset hours", hours, -25, 25));
        }
        Ok(Offset { seconds: i32::from(hours) * 3_600 })
    }

    /// Creates a new offset from a given number of seconds.
    ///
    /// # Errors
    ///
    /// When the given number of seconds is out of range. The range
    /// corresponds to the offsets `-25:59:59..=25:59:59`, or in units of
    /// seconds, `-93,599..=93,599`.
    ///
    /// # Example
    ///
    /// ```
    /// use microtz::Offset;
    ///
    /// let o = Offset::new_seconds(19_800)?;
    /// assert_eq!(o.to_string(), "+05:30");
    /// assert!(Offset::new_seconds(i32::MAX).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new_seconds(seconds: i32) -> Result<Offset, Error> {
        if !(MIN_SECONDS..=MAX_SECONDS).contains(&seconds) {
            return Err(Error::range(
                "offset seconds",
                seconds,
                MIN_SECONDS,
                MAX_SECONDS,
            ));
        }
        Ok(Offset { seconds })
    }

    /// Returns the total number of seconds in this offset.
    ///
    /// The value returned is guaranteed to be in the range
    /// `-93,599..=93,599`.
    #[inline]
    pub const fn seconds(self) -> i32 {
        self.seconds
    }

    /// Returns the negation of this offset. A no-op when the offset is
    /// zero.
    #[inline]
    pub const fn negate(self) -> Offset {
        Offset { seconds: -self.seconds }
    }

    /// Returns true when this offset is west of the prime meridian.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.seconds < 0
    }
}

impl core::fmt::Display for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let sign = if self.seconds < 0 { "-" } else { "+" };
        let seconds = self.seconds.unsigned_abs();
        let (hours, minutes, seconds) =
            (seconds / 3_600, seconds / 60 % 60, seconds % 60);
        if minutes == 0 && seconds == 0 {
            write!(f, "{sign}{hours:02}")
        } else if seconds == 0 {
            write!(f, "{sign}{hours:02}:{minutes:02}")
        } else {
            write!(f, "{sign}{hours:02}:{minutes:02}:{seconds:02}")
        }
    }
}

impl core::fmt::Debug for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Offset({self})")
    }
}

impl Neg for Offset {
    type Output = Offset;

    #[inline]
    fn neg(self) -> Offset {
        self.negate()
    }
}

/// Serializes as the total number of seconds in this offset.
#[cfg(feature = "serde")]
impl serde::Serialize for Offset {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.seconds)
    }
}

/// Deserializes from a number of seconds, enforcing this type's range.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Offset {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Offset, D::Error> {
        struct OffsetVisitor;

        impl<'de> serde::de::Visitor<'de> for OffsetVisitor {
            type Value = Offset;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a UTC offset in units of seconds")
            }

            fn visit_i64<E: serde::de::Error>(
                self,
                value: i64,
            ) -> Result<Offset, E> {
                let seconds = i32::try_from(value)
                    .map_err(|_| E::custom("offset seconds overflow i32"))?;
                Offset::new_seconds(seconds).map_err(E::custom)
            }

            fn visit_u64<E: serde::de::Error>(
                self,
                value: u64,
            ) -> Result<Offset, E> {
                let seconds = i32::try_from(value)
                    .map_err(|_| E::custom("offset seconds overflow i32"))?;
                Offset::new_seconds(seconds).map_err(E::custom)
            }
        }

        deserializer.deserialize_i32(OffsetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display() {
        let tests: &[(i32, &str)] = &[
            (0, "+00"),
            (-18_000, "-05"),
            (34_200, "+09:30"),
            (19_800, "+05:30"),
            (-18_060, "-05:01"),
            (-18_062, "-05:01:02"),
            (MIN_SECONDS, "-25:59:59"),
            (MAX_SECONDS, "+25:59:59"),
        ];
        for &(seconds, expected) in tests {
            let offset = Offset::constant_seconds(seconds);
            assert_eq!(offset.to_string(), expected, "offset {seconds}s");
        }
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Offset::new(26).is_err());
        assert!(Offset::new(-26).is_err());
        assert!(Offset::new_seconds(MAX_SECONDS + 1).is_err());
        assert!(Offset::new_seconds(MIN_SECONDS - 1).is_err());
        assert_eq!(Offset::new(-6).unwrap().seconds(), -21_600);
    }

    #[test]
    fn negate() {
        let offset = Offset::constant(-5);
        assert_eq!((-offset).seconds(), 18_000);
        assert_eq!((-Offset::UTC).seconds(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_seconds() {
        let offset = Offset::constant_seconds(-18_000);
        let json = serde_json::to_string(&offset).unwrap();
        assert_eq!(json, "-18000");
        assert_eq!(serde_json::from_str::<Offset>(&json).unwrap(), offset);
        // Deserialization enforces the same range as the constructors.
        assert!(serde_json::from_str::<Offset>("99999999").is_err());
    }
}
