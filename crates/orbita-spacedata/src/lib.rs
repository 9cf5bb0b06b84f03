//! Clients and reshaping for the public space-data feeds behind the proxy
//! endpoints: NASA NeoWs (asteroid approaches), NASA APOD (picture of the
//! day), NASA EONET (natural events) and Open Notify (people in space + ISS
//! position).
//!
//! Each feed gets a typed upstream shape, a flat published summary with the
//! Portuguese field names of the wire contract, and a pure reshape function
//! testable without HTTP.

pub mod apod;
pub mod asteroids;
pub mod client;
pub mod earth_events;
pub mod error;
pub mod people;

pub use apod::{ApodResponse, ApodSummary};
pub use asteroids::{
    summarize_feed, AsteroidReport, AsteroidSummary, NeoFeedResponse, SizeRange, MAX_ASTEROIDS,
};
pub use client::{SpaceDataClient, SpaceDataClientBuilder};
pub use earth_events::{summarize_events, EarthEventReport, EarthEventSummary, EonetResponse};
pub use error::SpaceDataError;
pub use people::{
    AstronautSummary, AstrosResponse, IssNowResponse, IssPositionSummary, PeopleInSpaceReport,
    FALLBACK_MESSAGE,
};
