//! Database Models

pub mod product;
pub mod serde_thing;

pub use product::{Product, ProductCreate, ProductUpdate};
