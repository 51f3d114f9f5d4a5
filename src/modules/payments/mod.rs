//! Payment form preparation, direct payments and refunds

pub mod builder;
pub mod classifier;
pub mod models;
