//! Domain entities - core business objects

mod channel;
mod group;
mod message;
mod user;

pub use channel::{Channel, NewChannel};
pub use group::{Group, NewGroup};
pub use message::{Message, NewMessage, Recipient};
pub use user::{NewUser, ProfileUpdate, User};
