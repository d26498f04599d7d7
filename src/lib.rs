//! # Expense API
//!
//! This crate provides a personal expense tracking service with:
//! - RESTful HTTP API endpoints for expense CRUD
//! - MongoDB for persistent storage
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **Domain Layer**: The expense entity and repository trait
//! - **Application Layer**: Business logic services and DTOs
//! - **Infrastructure Layer**: MongoDB client and repository implementation
//! - **Presentation Layer**: HTTP routes, handlers, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! expense_api/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities and repository traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ MongoDB implementations
//! +-- presentation/   HTTP routes and handlers
//! +-- shared/         Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
