pub mod account;
pub mod admin;
pub mod carrier_setup;
pub mod driver_setup;
pub mod home;
pub mod not_found;
pub mod privacy;
