pub mod models;
pub mod pii;

pub use models::flight::Flight;
pub use models::trip::{
    Activity, City, DestinationKind, ItineraryDay, NewTripRequest, Trip, TripStatus,
};
pub use models::user::User;
