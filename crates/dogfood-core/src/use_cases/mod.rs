pub mod checks;
pub mod dogfood;
pub mod pulls;
