//! Request handlers, one module per resource.
//!
//! Collection GETs accept an optional `?id=` that returns the single
//! matching record, kept for clients that pass the id as a query
//! parameter instead of a path segment.

pub mod brands;
pub mod categories;
pub mod pro_customers;
pub mod representatives;
pub mod services;
pub mod system;
pub mod trades;
pub mod vendors;
