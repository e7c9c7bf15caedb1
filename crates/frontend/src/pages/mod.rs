pub mod features;
pub mod home;
