//! # Candidats Module
//!
//! REST resource for the candidat entity:
//! - CRUD handlers mounted under `/api/candidats`
//! - The `CandidatStore` persistence port with SQLite and in-memory adapters

pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod store;


pub use routes::candidats_routes;
