use crate::{error::Error, offset::Offset, timestamp::Timestamp};

/// The zone record backing [`TimeZone::UTC`].
///
/// It carries no transitions: UTC never leaves its base offset, and the
/// lookup path treats an instant before any transition as "base offset
/// applies".
const UTC_DATA: ZoneData = ZoneData::new("UTC", 0, &[]);

/// A single offset change in a zone's history.
///
/// A transition records that, starting at `timestamp` (inclusive), the zone
/// observes `offset` until the next transition. Generated datasets are plain
/// `static` tables of these, which is why construction is `const`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Transition {
    timestamp: i64,
    offset: i32,
}

impl Transition {
    /// Creates a new transition taking effect at `timestamp` (seconds since
    /// the Unix epoch) with the given offset from UTC in seconds.
    ///
    /// # Panics
    ///
    /// When either value is out of range for [`Timestamp`] or [`Offset`].
    /// In a generated dataset this is a `static` initializer, so a bogus
    /// entry fails the build instead of corrupting lookups at runtime.
    #[inline]
    pub const fn new(timestamp: i64, offset_seconds: i32) -> Transition {
        Transition {
            timestamp: Timestamp::constant(timestamp).as_second(),
            offset: Offset::constant_seconds(offset_seconds).seconds(),
        }
    }

    /// Returns the instant at which this transition takes effect.
    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        Timestamp::constant(self.timestamp)
    }

    /// Returns the offset in effect from this transition until the next.
    #[inline]
    pub fn offset(&self) -> Offset {
        Offset::constant_seconds(self.offset)
    }
}

/// One zone's record in an offset dataset.
///
/// This is the unit an offline generator emits: the zone's IANA name, its
/// base (standard, non-DST) offset and the ordered transitions covering the
/// dataset's window. The ordering is a generator obligation; lookups binary
/// search the table and do not re-verify it.
///
/// A well formed record always has at least one transition, carrying the
/// offset in effect at the start of the coverage window. An empty table is
/// how a truncated dataset looks, and [`Database::get`](crate::Database::get)
/// rejects it.
pub struct ZoneData {
    name: &'static str,
    base: i32,
    transitions: &'static [Transition],
}

impl ZoneData {
    /// Creates a new zone record.
    ///
    /// `base_offset_seconds` is the zone's standard offset, returned for
    /// instants preceding every transition in the table.
    ///
    /// # Panics
    ///
    /// When `base_offset_seconds` is out of range for [`Offset`].
    #[inline]
    pub const fn new(
        name: &'static str,
        base_offset_seconds: i32,
        transitions: &'static [Transition],
    ) -> ZoneData {
        ZoneData {
            name,
            base: Offset::constant_seconds(base_offset_seconds).seconds(),
            transitions,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn transitions(&self) -> &'static [Transition] {
        self.transitions
    }
}

impl core::fmt::Debug for ZoneData {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("ZoneData")
            .field("name", &self.name)
            .field("base", &self.base)
            .field("transitions", &self.transitions.len())
            .finish()
    }
}

/// A handle to a single zone's offset data.
///
/// This is the resolver: given a UTC instant, [`TimeZone::to_offset`]
/// returns the offset a wall clock in this zone observes at that instant.
/// Values are cheap to copy (one pointer) and borrow from the dataset they
/// were resolved from, which lives for the life of the program.
///
/// # Example
///
/// ```
/// use microtz::{TimeZone, Timestamp};
///
/// let tz = TimeZone::get("America/Chicago")?;
/// // 2022-06-01T00:00:00Z, in the middle of daylight saving time.
/// let offset = tz.to_offset(Timestamp::constant(1_654_041_600));
/// assert_eq!(offset.to_string(), "-05");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy)]
pub struct TimeZone {
    data: &'static ZoneData,
}

impl TimeZone {
    /// The UTC time zone. Every lookup against it returns [`Offset::UTC`].
    pub const UTC: TimeZone = TimeZone { data: &UTC_DATA };

    /// Looks up a time zone by its IANA name in the global database.
    ///
    /// This is a convenience for `microtz::db().get(name)`. The name
    /// comparison ignores ASCII case, matching how IANA names are treated
    /// in the wild.
    ///
    /// # Errors
    ///
    /// When the name is not in the dataset, when the dataset's record for it
    /// is malformed, or when no dataset is compiled in at all. An unknown
    /// name is never silently mapped to a default offset.
    ///
    /// # Example
    ///
    /// ```
    /// use microtz::TimeZone;
    ///
    /// let tz = TimeZone::get("asia/tokyo")?;
    /// assert_eq!(tz.name(), "Asia/Tokyo");
    /// assert!(TimeZone::get("Mars/Olympus").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn get(name: &str) -> Result<TimeZone, Error> {
        crate::db().get(name)
    }

    pub(crate) const fn from_data(data: &'static ZoneData) -> TimeZone {
        TimeZone { data }
    }

    /// Returns the IANA name of this time zone, e.g. `America/Chicago`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.data.name
    }

    /// Returns this zone's base offset: the standard, non-DST offset that
    /// applies to instants preceding every transition in the dataset.
    #[inline]
    pub fn base_offset(&self) -> Offset {
        Offset::constant_seconds(self.data.base)
    }

    /// Returns the offset from UTC in effect in this time zone at the given
    /// instant.
    ///
    /// Adding the returned offset to the instant yields the civil time a
    /// wall clock in this zone shows. The lookup is a pure read over the
    /// static dataset: no allocation, no locking, O(log n) in the zone's
    /// transition count.
    ///
    /// # Coverage window
    ///
    /// Instants outside the dataset's coverage window are clamped to the
    /// nearest boundary: before the first transition the base offset
    /// applies, and after the last transition the last transition's offset
    /// applies. Whether the clamped answer matches the real world out there
    /// is unknowable from the data on hand, so treat out-of-window results
    /// as best effort. [`Database::coverage`](crate::Database::coverage)
    /// reports the window when callers need to detect this case.
    ///
    /// # Example
    ///
    /// ```
    /// use microtz::{TimeZone, Timestamp};
    ///
    /// let tz = TimeZone::get("America/Chicago")?;
    /// // One second before the 2022 spring-forward transition...
    /// assert_eq!(
    ///     tz.to_offset(Timestamp::constant(1_647_158_399)).seconds(),
    ///     -6 * 3_600,
    /// );
    /// // ...and exactly at it.
    /// assert_eq!(
    ///     tz.to_offset(Timestamp::constant(1_647_158_400)).seconds(),
    ///     -5 * 3_600,
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_offset(&self, timestamp: Timestamp) -> Offset {
        let transitions = self.data.transitions;
        let search = transitions
            .binary_search_by_key(&timestamp.as_second(), |t| t.timestamp);
        let index = match search {
            // The query is exactly at a transition, which takes effect at
            // its own instant. (Inclusive lower bound.)
            Ok(i) => i,
            // The query precedes every transition, so it is before this
            // dataset's coverage window. Standard time is the only
            // defensible answer on offer.
            Err(0) => return self.base_offset(),
            // i points to the position immediately after the latest
            // transition at or before the query, and i > 0 was handled
            // above. This also clamps queries past the window's end to the
            // final transition's offset.
            Err(i) => i - 1,
        };
        Offset::constant_seconds(transitions[index].offset)
    }

    /// Returns an iterator over this zone's transitions, in instant order.
    ///
    /// Useful for diagnostics and for callers that want to precompute the
    /// next transition after "now" (say, to schedule a display refresh).
    #[inline]
    pub fn transitions(&self) -> Transitions {
        Transitions { it: self.data.transitions.iter() }
    }
}

impl core::fmt::Debug for TimeZone {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("TimeZone").field(&self.data.name).finish()
    }
}

impl Eq for TimeZone {}

/// Two `TimeZone` values are equal when they point at the same zone record.
///
/// Distinct records are never compared structurally, even if they would
/// produce identical offsets for every instant: datasets with different
/// coverage windows can agree everywhere they overlap and still diverge
/// beyond it.
impl PartialEq for TimeZone {
    fn eq(&self, rhs: &TimeZone) -> bool {
        core::ptr::eq(self.data, rhs.data)
    }
}

/// An iterator over a zone's transitions, created by
/// [`TimeZone::transitions`].
#[derive(Clone, Debug)]
pub struct Transitions {
    it: core::slice::Iter<'static, Transition>,
}

impl Iterator for Transitions {
    type Item = Transition;

    #[inline]
    fn next(&mut self) -> Option<Transition> {
        self.it.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl ExactSizeIterator for Transitions {}

#[cfg(test)]
mod tests {
    use super::*;

    /// America/Chicago for 2022, as an offline generator would emit it:
    /// a window-start entry plus the two DST transitions.
    static CHICAGO: ZoneData = ZoneData::new(
        "America/Chicago",
        -6 * 3_600,
        &[
            Transition::new(1_640_995_200, -6 * 3_600), // 2022-01-01T00:00:00Z
            Transition::new(1_647_158_400, -5 * 3_600), // 2022-03-13T08:00:00Z
            Transition::new(1_667_718_000, -6 * 3_600), // 2022-11-06T07:00:00Z
        ],
    );

    /// Australia/Sydney for 2022. Southern hemisphere: DST is active at the
    /// window start, so the first entry differs from the base offset.
    static SYDNEY: ZoneData = ZoneData::new(
        "Australia/Sydney",
        10 * 3_600,
        &[
            Transition::new(1_640_995_200, 11 * 3_600), // 2022-01-01T00:00:00Z
            Transition::new(1_648_915_200, 10 * 3_600), // 2022-04-02T16:00:00Z
            Transition::new(1_664_640_000, 11 * 3_600), // 2022-10-01T16:00:00Z
        ],
    );

    fn chicago() -> TimeZone {
        TimeZone::from_data(&CHICAGO)
    }

    fn sydney() -> TimeZone {
        TimeZone::from_data(&SYDNEY)
    }

    /// The obviously-correct lookup the binary search must agree with.
    fn linear_scan(tz: TimeZone, timestamp: Timestamp) -> Offset {
        let mut offset = tz.base_offset();
        for t in tz.transitions() {
            if t.timestamp() > timestamp {
                break;
            }
            offset = t.offset();
        }
        offset
    }

    #[test]
    fn chicago_2022() {
        let tests: &[(i64, i32)] = &[
            (1_642_204_800, -6), // 2022-01-15T00:00:00Z
            (1_647_158_399, -6), // one second before spring forward
            (1_647_158_400, -5), // exactly at spring forward
            (1_654_041_600, -5), // 2022-06-01T00:00:00Z
            (1_667_717_999, -5), // one second before fall back
            (1_667_718_000, -6), // exactly at fall back
            (1_669_852_800, -6), // 2022-12-01T00:00:00Z
        ];
        for &(second, hours) in tests {
            let got = chicago().to_offset(Timestamp::constant(second));
            assert_eq!(
                got,
                Offset::constant(hours as i8),
                "offset at {}",
                Timestamp::constant(second),
            );
        }
    }

    #[test]
    fn before_window_returns_base_offset() {
        // 2021-06-01T00:00:00Z: mid-DST in the real world, but before this
        // dataset's window. The defined answer is standard time.
        let ts = Timestamp::constant(1_622_505_600);
        assert_eq!(chicago().to_offset(ts), Offset::constant(-6));
        assert_eq!(sydney().to_offset(ts), Offset::constant(10));
    }

    #[test]
    fn past_window_clamps_to_last_transition() {
        // 2024-07-01T00:00:00Z, well past the window. Chicago's final 2022
        // entry is standard time, Sydney's is DST; both just clamp.
        let ts = Timestamp::constant(1_719_792_000);
        assert_eq!(chicago().to_offset(ts), Offset::constant(-6));
        assert_eq!(sydney().to_offset(ts), Offset::constant(11));
    }

    #[test]
    fn sydney_window_start_is_dst() {
        let tz = sydney();
        let tests: &[(i64, i32)] = &[
            (1_640_995_200, 11), // window start, DST active
            (1_648_915_199, 11), // one second before DST ends
            (1_648_915_200, 10), // DST ends
            (1_664_639_999, 10), // one second before DST returns
            (1_664_640_000, 11), // DST returns
        ];
        for &(second, hours) in tests {
            let got = tz.to_offset(Timestamp::constant(second));
            assert_eq!(
                got,
                Offset::constant(hours as i8),
                "offset at {}",
                Timestamp::constant(second),
            );
        }
    }

    #[test]
    fn utc_has_no_transitions() {
        assert_eq!(TimeZone::UTC.transitions().len(), 0);
        assert_eq!(
            TimeZone::UTC.to_offset(Timestamp::UNIX_EPOCH),
            Offset::UTC,
        );
        assert_eq!(TimeZone::UTC.to_offset(Timestamp::MAX), Offset::UTC);
    }

    #[test]
    fn transition_accessors() {
        let first = chicago().transitions().next().unwrap();
        assert_eq!(first.timestamp(), Timestamp::constant(1_640_995_200));
        assert_eq!(first.offset(), Offset::constant(-6));
    }

    #[test]
    fn equality_is_by_record_identity() {
        assert_eq!(chicago(), chicago());
        assert_ne!(chicago(), sydney());
        assert_ne!(TimeZone::UTC, chicago());
    }

    quickcheck::quickcheck! {
        fn prop_binary_search_matches_linear_scan(second: i64) -> bool {
            // Fold arbitrary input into 2020..2024, straddling the window.
            let second =
                1_577_836_800 + second.rem_euclid(4 * 365 * 86_400);
            let ts = Timestamp::constant(second);
            [chicago(), sydney(), TimeZone::UTC].iter().all(|&tz| {
                tz.to_offset(ts) == linear_scan(tz, ts)
            })
        }

        fn prop_lookup_at_transition_is_inclusive(index: usize) -> bool {
            let tz = chicago();
            let transitions: alloc::vec::Vec<Transition> =
                tz.transitions().collect();
            let t = transitions[index % transitions.len()];
            tz.to_offset(t.timestamp()) == t.offset()
        }
    }
}
