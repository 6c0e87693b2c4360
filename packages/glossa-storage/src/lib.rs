pub mod concepts;
pub mod db;
pub mod hierarchy;
pub mod models;
pub mod schema;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
