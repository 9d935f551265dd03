pub mod connection;
pub mod schema;

pub use connection::{ConnectionParams, ConnectionProvider, ScopedConnection};
pub use schema::ensure_schema;
