pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod handlers;
pub mod ingest;
pub mod layers;
pub mod models;
pub mod repositories;
pub mod utils;
