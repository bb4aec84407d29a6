//! SeaORM entities for the post store.

pub mod post;
