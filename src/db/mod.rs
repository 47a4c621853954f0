pub mod connection;
pub mod schema;
pub mod settings;
pub mod tasks;

pub use connection::Database;
