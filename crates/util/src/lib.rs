pub mod path;
pub mod profile;
