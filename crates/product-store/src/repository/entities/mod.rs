//! Database entities for SeaORM.

pub mod product;
