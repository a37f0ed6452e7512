//! # Hoteldo Core Library
//!
//! Task management core for a hotel's weekend housekeeping list: tasks
//! carry a title, a due date, a completion state and an optional
//! recurring flag, and are displayed grouped by the target
//! Friday-Sunday weekend.
//!
//! ## Core Modules
//!
//! - [`db`]: Database connection and migration management
//! - [`models`]: Task entity, filters, pages and shared validation
//! - [`repository`]: Data access layer with Repository pattern
//! - [`weekend`]: Target-weekend and week-anchor date rules
//! - [`grouping`]: Pure display groupings (weekend, weekly, completed)
//! - [`clock`]: Injectable time source
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hoteldo_core::{
//!     db,
//!     models::NewTaskData,
//!     repository::{SqliteRepository, TaskRepository},
//!     weekend::target_weekend,
//! };
//! use chrono::Utc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hoteldo_core::error::CoreError> {
//!     let pool = db::establish_connection("hoteldo.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!
//!     let weekend = target_weekend(Utc::now().date_naive());
//!     let result = repo
//!         .create_if_absent(NewTaskData {
//!             title: "Clean lobby".to_string(),
//!             due_date: weekend.friday,
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("task {} ready", result.task().id);
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod db;
pub mod error;
pub mod grouping;
pub mod models;
pub mod repository;
pub mod weekend;
