use alloc::{boxed::Box, sync::Arc};

/// An error that can occur in this crate.
///
/// There is only one error type, covering every fallible operation:
///
/// * A zone name that is not present in the offset dataset.
/// * A dataset that is missing or malformed for a known zone name.
/// * A value that is out of range, such as an offset beyond `±25:59:59`.
///
/// # Introspection
///
/// Other than implementing the [`std::error::Error`] trait when the `std`
/// feature is enabled, along with [`core::fmt::Debug`] and
/// [`core::fmt::Display`], this type offers a small set of predicates like
/// [`Error::is_zone_lookup`]. The predicates are not exhaustive and the
/// error messages themselves are not part of the crate's stable API.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// The `Arc` keeps `Error` the size of one word and makes clones cheap.
    /// Fallible routines in this crate return `Result<_, Error>` on hot
    /// paths, so the happy path should move as little as possible.
    inner: Arc<ErrorKind>,
}

/// The underlying kind of an [`Error`].
#[derive(Clone, Debug)]
enum ErrorKind {
    /// A value was outside its allowed range.
    Range(RangeError),
    /// A zone name was not found in the offset dataset.
    ZoneLookup(ZoneLookupError),
    /// The offset dataset itself failed us.
    Dataset(DatasetError),
}

impl Error {
    /// Creates a new error indicating that `given` is out of the
    /// `min..=max` range. The `what` label is a human readable description
    /// of what exactly is out of range. (For example, "offset seconds".)
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }))
    }

    /// Creates a new error indicating that the given zone name is absent
    /// from the offset dataset.
    #[inline(never)]
    #[cold]
    pub(crate) fn zone_lookup(name: &str) -> Error {
        Error::from(ErrorKind::ZoneLookup(ZoneLookupError {
            name: name.into(),
        }))
    }

    /// Creates a new error indicating that a zone lookup was attempted
    /// against a database with no dataset configured at all.
    #[inline(never)]
    #[cold]
    pub(crate) fn dataset_none(name: &str) -> Error {
        Error::from(ErrorKind::Dataset(DatasetError::NoneConfigured {
            name: name.into(),
        }))
    }

    /// Creates a new error indicating that the dataset's record for a known
    /// zone name has no transitions at all. A well formed generated dataset
    /// always emits at least the coverage-window-start entry, so this
    /// implies a truncated or otherwise corrupt dataset.
    #[inline(never)]
    #[cold]
    pub(crate) fn dataset_empty(name: &str) -> Error {
        Error::from(ErrorKind::Dataset(DatasetError::EmptyZone {
            name: name.into(),
        }))
    }

    /// Returns true when this error came from a zone name lookup failure.
    ///
    /// # Example
    ///
    /// ```
    /// use microtz::TimeZone;
    ///
    /// let err = TimeZone::get("Mars/Olympus").unwrap_err();
    /// assert!(err.is_zone_lookup());
    /// ```
    pub fn is_zone_lookup(&self) -> bool {
        matches!(*self.inner, ErrorKind::ZoneLookup(_))
    }

    /// Returns true when this error indicates a missing or malformed
    /// dataset, as opposed to a zone name that simply isn't in it.
    pub fn is_dataset(&self) -> bool {
        matches!(*self.inner, ErrorKind::Dataset(_))
    }

    /// Returns true when this error came from a value being out of range.
    pub fn is_range(&self) -> bool {
        matches!(*self.inner, ErrorKind::Range(_))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(kind) }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self.inner {
            ErrorKind::Range(ref err) => err.fmt(f),
            ErrorKind::ZoneLookup(ref err) => err.fmt(f),
            ErrorKind::Dataset(ref err) => err.fmt(f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.inner).finish()
        }
    }
}

/// An error indicating that a value is out of its allowed range.
#[derive(Clone, Copy, Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// An error indicating that a zone name could not be found.
#[derive(Clone, Debug)]
struct ZoneLookupError {
    name: Box<str>,
}

impl core::fmt::Display for ZoneLookupError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to find time zone `{name}` in offset dataset",
            name = self.name,
        )
    }
}

/// An error indicating a problem with the offset dataset itself.
#[derive(Clone, Debug)]
enum DatasetError {
    NoneConfigured { name: Box<str> },
    EmptyZone { name: Box<str> },
}

impl core::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            DatasetError::NoneConfigured { ref name } => write!(
                f,
                "failed to find time zone `{name}` since there is no \
                 offset dataset configured (either enable this crate's \
                 `tzdata` feature or build a `Database` from your own \
                 generated dataset)",
            ),
            DatasetError::EmptyZone { ref name } => write!(
                f,
                "offset dataset record for time zone `{name}` has no \
                 transitions, which indicates a truncated or corrupt \
                 generated dataset",
            ),
        }
    }
}
