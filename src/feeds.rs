//! Catalog of the MTA's NYCT subway real-time endpoints.
//!
//! The MTA publishes a fixed set of GTFS-realtime URLs, one per line group,
//! all behind the same `x-api-key` header. The table below lets the CLI
//! accept a short feed id instead of a full URL.

/// Metadata for one MTA real-time feed endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedEndpoint {
    /// Short id accepted on the command line (e.g. `ace`).
    pub id: &'static str,
    /// Line group the feed covers.
    pub name: &'static str,
    /// Feed URL. Requires the `x-api-key` header.
    pub url: &'static str,
}

const FEEDS: &[FeedEndpoint] = &[
    FeedEndpoint {
        id: "1234567",
        name: "1/2/3/4/5/6/7/S",
        url: "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fgtfs",
    },
    FeedEndpoint {
        id: "ace",
        name: "A/C/E",
        url: "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fgtfs-ace",
    },
    FeedEndpoint {
        id: "bdfm",
        name: "B/D/F/M",
        url: "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fgtfs-bdfm",
    },
    FeedEndpoint {
        id: "g",
        name: "G",
        url: "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fgtfs-g",
    },
    FeedEndpoint {
        id: "jz",
        name: "J/Z",
        url: "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fgtfs-jz",
    },
    FeedEndpoint {
        id: "nqrw",
        name: "N/Q/R/W",
        url: "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fgtfs-nqrw",
    },
    FeedEndpoint {
        id: "l",
        name: "L",
        url: "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fgtfs-l",
    },
    FeedEndpoint {
        id: "si",
        name: "Staten Island Railway",
        url: "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fgtfs-si",
    },
];

/// All known endpoints, in publication order.
pub fn known_feeds() -> &'static [FeedEndpoint] {
    FEEDS
}

/// Looks up an endpoint by its short id, case-insensitively.
pub fn find(id: &str) -> Option<&'static FeedEndpoint> {
    FEEDS.iter().find(|f| f.id.eq_ignore_ascii_case(id))
}
