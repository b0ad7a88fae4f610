use crate::{
    error::Error,
    timestamp::Timestamp,
    timezone::{TimeZone, ZoneData},
    util,
};

/// Returns a reference to the global offset database.
///
/// With the `tzdata` feature enabled (the default), this is the bundled
/// generated dataset. Without it, this is a database with no dataset at
/// all, whose lookups fail with a configuration error; deployments shipping
/// their own generated dataset should build a [`Database`] from it with
/// [`Database::from_zones`] and hold on to that instead.
///
/// # Example
///
/// ```
/// use microtz::{db, Timestamp};
///
/// let tz = db().get("Europe/Paris")?;
/// // 2022-07-14T12:00:00Z
/// let offset = tz.to_offset(Timestamp::constant(1_657_800_000));
/// assert_eq!(offset.to_string(), "+02");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn db() -> &'static Database {
    #[cfg(feature = "tzdata")]
    {
        static BUNDLED: Database = Database::bundled();
        &BUNDLED
    }
    #[cfg(not(feature = "tzdata"))]
    {
        static NONE: Database = Database::none();
        &NONE
    }
}

/// An offset dataset, keyed by IANA zone name.
///
/// A database is an immutable view over `static` zone records produced by
/// an offline generator. Every lookup is a read; there is nothing to lock,
/// refresh or invalidate at runtime. Updating the data means shipping a new
/// artifact.
///
/// Most callers never touch this type and go through
/// [`TimeZone::get`](crate::TimeZone::get), which queries the global
/// [`db()`].
pub struct Database {
    kind: DatabaseKind,
}

enum DatabaseKind {
    /// No dataset was compiled in or provided. Lookups fail loudly rather
    /// than guessing an offset.
    None,
    Fixed(FixedDataset),
}

struct FixedDataset {
    /// Zone records sorted by ASCII-case-folded name. Sorting is part of
    /// the generator contract; `get` binary searches on it.
    zones: &'static [ZoneData],
    /// The IANA tzdata release the dataset was generated from.
    version: Option<&'static str>,
    /// The generated coverage window, half open.
    coverage: Option<(Timestamp, Timestamp)>,
}

impl Database {
    /// Creates a database with no dataset at all.
    ///
    /// Every lookup against it returns a configuration error. This is what
    /// the global [`db()`] hands out when the `tzdata` feature is disabled
    /// and nothing else has been wired up.
    pub const fn none() -> Database {
        Database { kind: DatabaseKind::None }
    }

    /// Creates a database from a generated dataset.
    ///
    /// The records must be sorted by ASCII-case-folded zone name, each with
    /// its transitions in strictly increasing instant order. Generators are
    /// expected to guarantee both; [`Database::get`] does not re-verify
    /// them on every lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use microtz::{Database, Timestamp, Transition, ZoneData};
    ///
    /// static ZONES: &[ZoneData] = &[ZoneData::new(
    ///     "America/Chicago",
    ///     -6 * 3_600,
    ///     &[
    ///         Transition::new(1_640_995_200, -6 * 3_600),
    ///         Transition::new(1_647_158_400, -5 * 3_600),
    ///         Transition::new(1_667_718_000, -6 * 3_600),
    ///     ],
    /// )];
    /// static DB: Database = Database::from_zones(ZONES);
    ///
    /// let tz = DB.get("America/Chicago")?;
    /// assert_eq!(
    ///     tz.to_offset(Timestamp::constant(1_654_041_600)).seconds(),
    ///     -5 * 3_600,
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub const fn from_zones(zones: &'static [ZoneData]) -> Database {
        Database {
            kind: DatabaseKind::Fixed(FixedDataset {
                zones,
                version: None,
                coverage: None,
            }),
        }
    }

    /// Records the IANA tzdata release this dataset was generated from,
    /// e.g. `2021e`. Purely diagnostic.
    pub const fn with_version(self, version: &'static str) -> Database {
        match self.kind {
            DatabaseKind::None => Database::none(),
            DatabaseKind::Fixed(dataset) => Database {
                kind: DatabaseKind::Fixed(FixedDataset {
                    zones: dataset.zones,
                    version: Some(version),
                    coverage: dataset.coverage,
                }),
            },
        }
    }

    /// Records the dataset's generated coverage window, as a half open
    /// range of instants.
    pub const fn with_coverage(
        self,
        start: Timestamp,
        end: Timestamp,
    ) -> Database {
        match self.kind {
            DatabaseKind::None => Database::none(),
            DatabaseKind::Fixed(dataset) => Database {
                kind: DatabaseKind::Fixed(FixedDataset {
                    zones: dataset.zones,
                    version: dataset.version,
                    coverage: Some((start, end)),
                }),
            },
        }
    }

    /// The bundled dataset, compiled in via the `tzdata` feature.
    #[cfg(feature = "tzdata")]
    pub(crate) const fn bundled() -> Database {
        Database::from_zones(crate::tzdata::ZONES)
            .with_version(crate::tzdata::VERSION)
            .with_coverage(
                crate::tzdata::WINDOW_START,
                crate::tzdata::WINDOW_END,
            )
    }

    /// Looks up a time zone by its IANA name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// * The name is not in the dataset: a zone-lookup error. Lookups never
    ///   fall back to a default offset.
    /// * The record for the name has no transitions: a dataset error. A
    ///   generated record always carries at least the window-start entry,
    ///   so an empty one means the dataset is truncated or corrupt, which
    ///   is a deployment defect and not something to paper over.
    /// * This database has no dataset at all: a dataset error.
    pub fn get(&self, name: &str) -> Result<TimeZone, Error> {
        let dataset = match self.kind {
            DatabaseKind::None => {
                trace!("no offset dataset, failing lookup for {name:?}");
                return Err(Error::dataset_none(name));
            }
            DatabaseKind::Fixed(ref dataset) => dataset,
        };
        let index = dataset
            .zones
            .binary_search_by(|z| util::cmp_ignore_ascii_case(z.name(), name))
            .map_err(|_| {
                trace!("time zone {name:?} not in offset dataset");
                Error::zone_lookup(name)
            })?;
        let data = &dataset.zones[index];
        if data.transitions().is_empty() {
            warn!("offset dataset record for {name:?} is empty");
            return Err(Error::dataset_empty(data.name()));
        }
        trace!(
            "resolved {name:?} to {canonical:?} ({len} transitions)",
            canonical = data.name(),
            len = data.transitions().len(),
        );
        Ok(TimeZone::from_data(data))
    }

    /// Returns an iterator over the canonical names of every zone in this
    /// database, in dataset (case-folded lexicographic) order.
    pub fn available(&self) -> ZoneNames {
        let zones: &'static [ZoneData] = match self.kind {
            DatabaseKind::None => &[],
            DatabaseKind::Fixed(ref dataset) => dataset.zones,
        };
        ZoneNames { it: zones.iter() }
    }

    /// Returns the IANA tzdata release this database's dataset was
    /// generated from, when known.
    pub fn version(&self) -> Option<&'static str> {
        match self.kind {
            DatabaseKind::None => None,
            DatabaseKind::Fixed(ref dataset) => dataset.version,
        }
    }

    /// Returns the dataset's generated coverage window as a half open
    /// `[start, end)` range, when known.
    ///
    /// Lookups outside the window still succeed with a boundary-clamped
    /// offset (see [`TimeZone::to_offset`](crate::TimeZone::to_offset));
    /// this is how callers find out they are in that regime.
    pub fn coverage(&self) -> Option<(Timestamp, Timestamp)> {
        match self.kind {
            DatabaseKind::None => None,
            DatabaseKind::Fixed(ref dataset) => dataset.coverage,
        }
    }
}

impl core::fmt::Debug for Database {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind {
            DatabaseKind::None => f.debug_struct("Database").finish(),
            DatabaseKind::Fixed(ref dataset) => f
                .debug_struct("Database")
                .field("zones", &dataset.zones.len())
                .field("version", &dataset.version)
                .field("coverage", &dataset.coverage)
                .finish(),
        }
    }
}

/// An iterator over the zone names in a [`Database`], created by
/// [`Database::available`].
#[derive(Clone, Debug)]
pub struct ZoneNames {
    it: core::slice::Iter<'static, ZoneData>,
}

impl Iterator for ZoneNames {
    type Item = &'static str;

    #[inline]
    fn next(&mut self) -> Option<&'static str> {
        self.it.next().map(|z| z.name())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl ExactSizeIterator for ZoneNames {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::timezone::Transition;

    #[test]
    fn none_database_fails_loudly() {
        let db = Database::none();
        let err = db.get("America/Chicago").unwrap_err();
        assert!(err.is_dataset());
        assert_eq!(db.available().len(), 0);
        assert_eq!(db.version(), None);
        assert_eq!(db.coverage(), None);
    }

    #[test]
    fn empty_zone_record_is_rejected() {
        static ZONES: &[ZoneData] =
            &[ZoneData::new("Atlantis/Aquopolis", 0, &[])];
        static DB: Database = Database::from_zones(ZONES);
        let err = DB.get("Atlantis/Aquopolis").unwrap_err();
        assert!(err.is_dataset());
        assert!(!err.is_zone_lookup());
    }

    #[test]
    fn custom_dataset_lookup() {
        static ZONES: &[ZoneData] = &[
            ZoneData::new(
                "Asia/Kathmandu",
                5 * 3_600 + 45 * 60,
                &[Transition::new(1_640_995_200, 5 * 3_600 + 45 * 60)],
            ),
            ZoneData::new(
                "Atlantic/Azores",
                -3_600,
                &[
                    Transition::new(1_640_995_200, -3_600),
                    Transition::new(1_648_342_800, 0),
                    Transition::new(1_667_091_600, -3_600),
                ],
            ),
        ];
        static DB: Database = Database::from_zones(ZONES)
            .with_version("2021e")
            .with_coverage(
                Timestamp::constant(1_640_995_200),
                Timestamp::constant(1_672_531_200),
            );

        let tz = DB.get("asia/KATHMANDU").unwrap();
        assert_eq!(tz.name(), "Asia/Kathmandu");
        assert_eq!(
            tz.to_offset(Timestamp::constant(1_654_041_600)).to_string(),
            "+05:45",
        );
        assert_eq!(DB.version(), Some("2021e"));
        let (start, end) = DB.coverage().unwrap();
        assert_eq!(start.to_string(), "2022-01-01T00:00:00Z");
        assert_eq!(end.to_string(), "2023-01-01T00:00:00Z");
    }

    #[cfg(feature = "tzdata")]
    mod bundled {
        use super::*;
        use crate::db;

        #[test]
        fn lookup_is_case_insensitive() {
            let tz = db().get("america/chicago").unwrap();
            assert_eq!(tz.name(), "America/Chicago");
            let tz = db().get("UTC").unwrap();
            assert_eq!(tz.name(), "UTC");
        }

        #[test]
        fn unknown_zone() {
            let err = db().get("Mars/Olympus").unwrap_err();
            assert!(err.is_zone_lookup());
            assert!(err.to_string().contains("Mars/Olympus"));
        }

        #[test]
        fn zone_table_is_sorted_and_unique() {
            let names: alloc::vec::Vec<&str> = db().available().collect();
            assert!(!names.is_empty());
            for pair in names.windows(2) {
                assert_eq!(
                    crate::util::cmp_ignore_ascii_case(pair[0], pair[1]),
                    core::cmp::Ordering::Less,
                    "{pair:?} out of order",
                );
            }
        }

        #[test]
        fn every_name_resolves_to_itself() {
            for name in db().available() {
                let tz = db().get(name).unwrap();
                assert_eq!(tz.name(), name);
            }
        }

        #[test]
        fn bundled_metadata() {
            assert_eq!(db().version(), Some("2021e"));
            let (start, end) = db().coverage().unwrap();
            assert_eq!(start.to_string(), "2022-01-01T00:00:00Z");
            assert_eq!(end.to_string(), "2023-01-01T00:00:00Z");
        }
    }
}
