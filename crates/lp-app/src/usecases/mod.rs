pub mod home;
pub mod permission;
