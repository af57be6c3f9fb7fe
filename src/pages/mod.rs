pub mod index;
pub mod not_found;
pub mod style;
pub mod submitted;
