//! Entity to model mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod channel;
mod group;
mod message;
mod user;

pub use channel::slowmode_to_db;
pub use message::RecipientColumns;
pub use user::{ProfileColumns, UserInsert};
