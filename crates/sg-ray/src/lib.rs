//! `sg-ray` — grid-ray traversal.
//!
//! A single, self-contained geometry routine: given a ray anchored at a
//! grid cell, list every unit cell its carrier line crosses inside the grid
//! bounds.  Independent of the pricing pipeline; shares only `GridPoint`
//! with it.

pub mod ray;

#[cfg(test)]
mod tests;

pub use ray::Ray;
