pub mod clean;
pub mod doctor;
pub mod fetch;
pub mod list;
