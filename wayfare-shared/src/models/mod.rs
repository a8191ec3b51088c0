pub mod flight;
pub mod trip;
pub mod user;
