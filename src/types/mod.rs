pub mod full_name;
pub mod user;
