//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness and store check
//! - [`productos`] - admin catalog CRUD surface
//! - [`cliente`] - customer listing and purchase surface

pub mod cliente;
pub mod health;
pub mod productos;
