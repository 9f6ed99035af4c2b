//! Display formatting for plans and migration reports.
//!
//! Every formatter produces markdown so the CLI can render it through its
//! terminal renderer, or print it verbatim with colors disabled.
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for steps and outcomes
//! - [`report`]: Report, banner and plan wrappers
//! - [`datetime`]: Date/time formatting utilities
//!
//! ```rust
//! use std::path::Path;
//!
//! use porter_core::{display::PlanView, models::MigrationPlan};
//!
//! let plan = MigrationPlan::default_plan();
//! let view = PlanView {
//!     plan: &plan,
//!     source_root: Path::new("/work/valute"),
//!     dest_root: Path::new("/work/new-app"),
//! };
//! assert!(view.to_string().contains("drizzle/schema.ts"));
//! ```

pub mod datetime;
pub mod models;
pub mod report;

pub use datetime::{Elapsed, LocalDateTime};
pub use report::{Banner, PlanView};
