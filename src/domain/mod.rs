//! Domain entities and value types shared by the persistence and HTTP layers.

pub mod category;
pub mod question;
pub mod types;
