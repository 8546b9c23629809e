//! Library Desk
//!
//! A single-user library catalog: books, readers and loans held in memory by
//! a [`LibraryManager`](services::LibraryManager) and persisted as three JSON
//! array documents.

pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use repository::DataFiles;
pub use services::{Clock, LibraryManager, LoadOutcome, SystemClock};
