// src/lib.rs
pub mod config;
pub mod routes;
pub mod handlers;
pub mod models;
pub mod database;
pub mod state;
pub mod dtos; // expose DTO modules
pub mod error;
pub mod selection;
