// Generated by microtz-gen from IANA tzdata 2021e. DO NOT EDIT.
//
// Coverage window: 2022-01-01T00:00:00Z..2023-01-01T00:00:00Z (half open).
// Zone records are sorted by ASCII-case-folded name. Offsets are seconds
// east of UTC. The first entry of every record is the window-start offset.

use crate::{Timestamp, Transition, ZoneData};

pub(crate) static VERSION: &str = "2021e";

pub(crate) const WINDOW_START: Timestamp =
    Timestamp::constant(1640995200);
pub(crate) const WINDOW_END: Timestamp =
    Timestamp::constant(1672531200);

pub(crate) static ZONES: &[ZoneData] = &[
    ZoneData::new(
        "America/Chicago",
        -21600,
        &[
            Transition::new(1640995200, -21600),
            Transition::new(1647158400, -18000),
            Transition::new(1667718000, -21600),
        ],
    ),
    ZoneData::new(
        "America/Denver",
        -25200,
        &[
            Transition::new(1640995200, -25200),
            Transition::new(1647162000, -21600),
            Transition::new(1667721600, -25200),
        ],
    ),
    ZoneData::new(
        "America/Los_Angeles",
        -28800,
        &[
            Transition::new(1640995200, -28800),
            Transition::new(1647165600, -25200),
            Transition::new(1667725200, -28800),
        ],
    ),
    ZoneData::new(
        "America/New_York",
        -18000,
        &[
            Transition::new(1640995200, -18000),
            Transition::new(1647154800, -14400),
            Transition::new(1667714400, -18000),
        ],
    ),
    ZoneData::new(
        "America/Phoenix",
        -25200,
        &[
            Transition::new(1640995200, -25200),
        ],
    ),
    ZoneData::new(
        "America/Sao_Paulo",
        -10800,
        &[
            Transition::new(1640995200, -10800),
        ],
    ),
    ZoneData::new(
        "Asia/Kolkata",
        19800,
        &[
            Transition::new(1640995200, 19800),
        ],
    ),
    ZoneData::new(
        "Asia/Tokyo",
        32400,
        &[
            Transition::new(1640995200, 32400),
        ],
    ),
    ZoneData::new(
        "Australia/Sydney",
        36000,
        &[
            Transition::new(1640995200, 39600),
            Transition::new(1648915200, 36000),
            Transition::new(1664640000, 39600),
        ],
    ),
    ZoneData::new(
        "Europe/London",
        0,
        &[
            Transition::new(1640995200, 0),
            Transition::new(1648342800, 3600),
            Transition::new(1667091600, 0),
        ],
    ),
    ZoneData::new(
        "Europe/Paris",
        3600,
        &[
            Transition::new(1640995200, 3600),
            Transition::new(1648342800, 7200),
            Transition::new(1667091600, 3600),
        ],
    ),
    ZoneData::new(
        "Pacific/Auckland",
        43200,
        &[
            Transition::new(1640995200, 46800),
            Transition::new(1648908000, 43200),
            Transition::new(1664028000, 46800),
        ],
    ),
    ZoneData::new(
        "UTC",
        0,
        &[
            Transition::new(1640995200, 0),
        ],
    ),
];
