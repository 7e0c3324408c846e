//! SeaORM entities
//!
//! Table mappings for the PostgreSQL adapter. Domain code never sees these;
//! the adapters convert to and from `domain::entities`.

pub mod order_items;
pub mod orders;
pub mod products;
