//! Game implementations.

pub mod connect;
