pub mod rand;
pub mod uuid;

pub use crate::uuid::Uuid;
