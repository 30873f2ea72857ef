pub mod home;
pub mod login;
pub mod not_available;
pub mod unauthorized;
