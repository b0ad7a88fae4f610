use crate::{error::Error, util::CivilDateTime};

/// The minimum supported second, corresponding to `-9999-01-01T00:00:00Z`.
const MIN_SECOND: i64 = -377_705_116_800;

/// The maximum supported second, corresponding to `9999-12-31T23:59:59Z`.
const MAX_SECOND: i64 = 253_402_300_799;

/// An instant in time, as a number of seconds since the Unix epoch.
///
/// This is the query key for offset lookups. On the targets this crate is
/// written for, the value usually comes straight from a network time source
/// (NTP) or a battery backed RTC, both of which hand out UTC seconds.
///
/// The supported range is limited to the years `-9999..=9999` so that every
/// representable instant has a printable civil form. Sub-second precision is
/// intentionally absent: offset transitions in the IANA database happen on
/// whole second boundaries, and the consumers this crate targets rarely track
/// time more precisely than that.
///
/// # Display format
///
/// Formats as RFC 3339 in UTC, e.g. `2022-03-13T08:00:00Z`.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Timestamp {
    second: i64,
}

impl Timestamp {
    /// The minimum supported instant, `-9999-01-01T00:00:00Z`.
    pub const MIN: Timestamp = Timestamp { second: MIN_SECOND };

    /// The maximum supported instant, `9999-12-31T23:59:59Z`.
    pub const MAX: Timestamp = Timestamp { second: MAX_SECOND };

    /// The Unix epoch, `1970-01-01T00:00:00Z`.
    pub const UNIX_EPOCH: Timestamp = Timestamp { second: 0 };

    /// Creates a new timestamp in a `const` context from a number of
    /// seconds since the Unix epoch.
    ///
    /// The fallible non-const version of this constructor is
    /// [`Timestamp::new`].
    ///
    /// # Panics
    ///
    /// When the given number of seconds falls outside the years
    /// `-9999..=9999`.
    ///
    /// # Example
    ///
    /// ```
    /// use microtz::Timestamp;
    ///
    /// let ts = Timestamp::constant(1_647_158_400);
    /// assert_eq!(ts.to_string(), "2022-03-13T08:00:00Z");
    /// ```
    #[inline]
    pub const fn constant(second: i64) -> Timestamp {
        if second < MIN_SECOND || second > MAX_SECOND {
            panic!("invalid timestamp seconds");
        }
        Timestamp { second }
    }

    /// Creates a new timestamp from a number of seconds since the Unix
    /// epoch.
    ///
    /// # Errors
    ///
    /// When the given number of seconds falls outside the years
    /// `-9999..=9999`.
    ///
    /// # Example
    ///
    /// ```
    /// use microtz::Timestamp;
    ///
    /// let ts = Timestamp::new(0)?;
    /// assert_eq!(ts, Timestamp::UNIX_EPOCH);
    /// assert!(Timestamp::new(i64::MAX).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(second: i64) -> Result<Timestamp, Error> {
        if !(MIN_SECOND..=MAX_SECOND).contains(&second) {
            return Err(Error::range(
                "timestamp seconds",
                second,
                MIN_SECOND,
                MAX_SECOND,
            ));
        }
        Ok(Timestamp { second })
    }

    /// Returns this timestamp as a number of seconds since the Unix epoch.
    #[inline]
    pub const fn as_second(self) -> i64 {
        self.second
    }
}

impl core::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let dt = CivilDateTime::from_second(self.second);
        let (sign, year) =
            if dt.year < 0 { ("-", -dt.year) } else { ("", dt.year) };
        write!(
            f,
            "{sign}{year:04}-{month:02}-{day:02}T\
             {hour:02}:{minute:02}:{second:02}Z",
            month = dt.month,
            day = dt.day,
            hour = dt.hour,
            minute = dt.minute,
            second = dt.second,
        )
    }
}

impl core::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Timestamp({self})")
    }
}

/// Serializes as the number of seconds since the Unix epoch.
#[cfg(feature = "serde")]
impl serde::Serialize for Timestamp {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.second)
    }
}

/// Deserializes from a number of seconds, enforcing this type's range.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Timestamp {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Timestamp, D::Error> {
        struct TimestampVisitor;

        impl<'de> serde::de::Visitor<'de> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a Unix timestamp in units of seconds")
            }

            fn visit_i64<E: serde::de::Error>(
                self,
                value: i64,
            ) -> Result<Timestamp, E> {
                Timestamp::new(value).map_err(E::custom)
            }

            fn visit_u64<E: serde::de::Error>(
                self,
                value: u64,
            ) -> Result<Timestamp, E> {
                let second = i64::try_from(value)
                    .map_err(|_| E::custom("timestamp seconds overflow i64"))?;
                Timestamp::new(second).map_err(E::custom)
            }
        }

        deserializer.deserialize_i64(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display() {
        let tests: &[(i64, &str)] = &[
            (0, "1970-01-01T00:00:00Z"),
            (-1, "1969-12-31T23:59:59Z"),
            (1_640_995_200, "2022-01-01T00:00:00Z"),
            (1_647_158_400, "2022-03-13T08:00:00Z"),
            (1_667_718_000, "2022-11-06T07:00:00Z"),
            (951_782_400, "2000-02-29T00:00:00Z"),
            (MIN_SECOND, "-9999-01-01T00:00:00Z"),
            (MAX_SECOND, "9999-12-31T23:59:59Z"),
        ];
        for &(second, expected) in tests {
            let ts = Timestamp::constant(second);
            assert_eq!(ts.to_string(), expected, "timestamp {second}");
        }
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Timestamp::new(MIN_SECOND - 1).is_err());
        assert!(Timestamp::new(MAX_SECOND + 1).is_err());
        assert!(Timestamp::new(MAX_SECOND).is_ok());
        let err = Timestamp::new(i64::MAX).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn ordering() {
        assert!(Timestamp::MIN < Timestamp::UNIX_EPOCH);
        assert!(Timestamp::UNIX_EPOCH < Timestamp::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_seconds() {
        let ts = Timestamp::constant(1_640_995_200);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1640995200");
        assert_eq!(serde_json::from_str::<Timestamp>(&json).unwrap(), ts);
        // Deserialization enforces the same range as the constructors.
        assert!(serde_json::from_str::<Timestamp>("9223372036854775807")
            .is_err());
    }
}
