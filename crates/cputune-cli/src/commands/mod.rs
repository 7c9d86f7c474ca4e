pub mod check;
pub mod profiles;
pub mod schema;
pub mod show;
