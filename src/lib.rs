//! Relational schema for a movie catalog: movies with directors, cast,
//! genres, an optional category, a still-frame gallery, star ratings, and
//! threaded reviews. Persistence runs through sea-orm; DDL lives in the
//! `migration` workspace member.

pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod media;
pub mod models;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{AppError, AppResult};
