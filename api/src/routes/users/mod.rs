//! Protected user routes.

pub mod profile;

pub use profile::user_profile;
