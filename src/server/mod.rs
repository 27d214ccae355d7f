//! Server-side API backend and business logic.
//!
//! The backend uses Axum for the JSON API, SeaORM for persistence and Serenity to keep the
//! list of reviewable Discord servers in sync.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations returning domain models
//! - **Model Layer** (`model/`) - Domain models and operation parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Bot** (`bot/`) - Discord gateway events that upsert guild metadata
//!
//! Supporting modules: `config` (environment configuration), `state` (shared `AppState`),
//! `startup` (database connection and migrations) and `router` (API routes).
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** converts the DTO to params and calls the service
//! 3. **Service** validates, then calls repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO for the response
//!
//! This module is only available with the `server` feature flag enabled.

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
