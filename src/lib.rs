/*!
IANA time zone offset lookup for memory-constrained environments.

This crate answers one question: given an IANA zone name like
`America/Chicago` and a UTC instant, what is the UTC offset in effect at
that instant? It exists for targets that cannot afford a full copy of the
[Time Zone Database]: instead of parsing TZif files at runtime, an offline
generator distills the database down to a per-zone table of
`(instant, offset)` transitions covering a bounded window, and that table is
compiled into the deployed artifact as plain `static` data. The lookup path
is a binary search over one zone's table: no allocation, no locking, no
filesystem.

The intended consumer is a device that learns UTC from a network time source
and wants to show local civil time. Adding the resolved [`Offset`] to the
UTC instant yields local time; everything beyond that addition (calendars,
formatting, locales) is left to whatever date/time machinery the runtime
already has.

# Example

```
use microtz::{TimeZone, Timestamp};

// Typically obtained from NTP or a battery backed RTC.
let now = Timestamp::constant(1_654_041_600); // 2022-06-01T00:00:00Z
let tz = TimeZone::get("America/Chicago")?;
let offset = tz.to_offset(now);
assert_eq!(offset.to_string(), "-05");

// Local civil time is `now + offset`.
let local = Timestamp::new(now.as_second() + i64::from(offset.seconds()))?;
assert_eq!(local.to_string(), "2022-05-31T19:00:00Z");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# The dataset

The bundled dataset (the `tzdata` crate feature) is produced by an external
generator from a named IANA tzdata release and covers a fixed window, one
calendar year at a time of generation. The generator is ordinary offline
tooling and not part of this crate; the contract it must satisfy is spelled
out on [`Database::from_zones`] and [`ZoneData`]. Deployments that want a
different window, a different zone selection or a fresher tzdata release
disable the feature and register their own generated tables.

Out-of-window queries are answered by clamping to the nearest boundary:
before the window the zone's base (standard) offset applies, past it the
final transition's offset applies. The clamped answer is best effort by
definition, since the data to do better was never generated. See
[`TimeZone::to_offset`] and [`Database::coverage`].

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` for this
  crate's error type. Everything else works on `core` + `alloc`.
* **alloc** (enabled by default, via `std`) - Dynamic memory allocation,
  used only to build error values. The lookup path never allocates.
* **tzdata** (enabled by default) - Compiles in the bundled generated
  dataset and points the global [`db()`] at it.
* **logging** - Emits diagnostics via the [`log`] crate, mostly on the zone
  lookup path.
* **serde** - Serialization support for [`Timestamp`] and [`Offset`], as
  their integer second representations.

[Time Zone Database]: https://www.iana.org/time-zones
[`log`]: https://docs.rs/log
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

// 16-bit targets are plausible consumers of something like this crate, but
// nothing here has been tested or even thought through for them.
#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("microtz currently requires a {32,64}-bit target");

#[cfg(any(test, feature = "std"))]
extern crate std;

// Required for now: error values allocate their messages. The lookup path
// itself is allocation free and could in principle be carved out for a
// core-only build if a concrete use case shows up.
extern crate alloc;

pub use crate::{
    db::{db, Database, ZoneNames},
    error::Error,
    offset::Offset,
    timestamp::Timestamp,
    timezone::{TimeZone, Transition, Transitions, ZoneData},
};

#[macro_use]
mod logging;

mod db;
mod error;
mod offset;
mod timestamp;
mod timezone;
#[cfg(feature = "tzdata")]
mod tzdata;
mod util;
