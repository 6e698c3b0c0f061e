//! # todo-form
//!
//! Route table and task form validation for the to-do application.
//!
//! ## Features
//!
//! - **Field Validation**: Check a task's title, description and deadline in one pass
//! - **Injectable Clock**: Pin "today" for tests and reproducible runs
//! - **Configurable Rules**: Adjust minimum field lengths through [`ValidationRules`](tasks::rules::ValidationRules)
//! - **Route Table**: Ordered path, name and page declarations for the navigator
//! - **Serialization**: Optional serde support, including validation of raw JSON input
//!
//! ## Quick Start
//!
//! ```rust
//! use todo_form::tasks::{clock::FixedClock, task::Task, validator::TaskValidator};
//!
//! let validator = TaskValidator::with_clock(FixedClock::from_iso("2026-10-19").unwrap());
//!
//! let task = Task::new("Buy milk")
//!     .description("Buy milk from the store")
//!     .deadline("2026-10-20");
//!
//! let result = validator.validate(&task);
//! assert!(result.is_valid());
//! assert!(result.errors().is_empty());
//! ```
//!
//! ## Reporting Field Errors
//!
//! ```rust
//! use todo_form::tasks::{clock::FixedClock, result::TaskField, task::Task, validator::TaskValidator};
//!
//! let validator = TaskValidator::with_clock(FixedClock::from_iso("2026-10-19").unwrap());
//! let task = Task::new("Hi").description("Short").deadline("2020-01-01");
//!
//! let result = validator.validate(&task);
//! assert!(!result.is_valid());
//! assert_eq!(
//!     result.error(TaskField::Title),
//!     Some("Title must be at least 3 characters.")
//! );
//! for (field, message) in result.errors() {
//!     println!("{field}: {message}");
//! }
//! ```
//!
//! ## Routing
//!
//! ```rust
//! use todo_form::router::table::{app_routes, Page};
//!
//! let routes = app_routes();
//! assert_eq!(routes.find_by_path("/todolist").map(|r| &r.page), Some(&Page::ToDoList));
//! ```
//!
//! ## Optional Features
//!
//! - `serde`: Enable serialization support and [`TaskValidator::validate_value`](tasks::validator::TaskValidator::validate_value)
//! - `tracing`: Enable structured logging integration

pub mod router;
pub mod tasks;
