//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Quiz, Session)
//! - Domain value objects (QuizId, UserId)
//! - The quiz catalog
//! - The answer matcher (normalization + synonym folding)
//! - Domain services (quiz selection)
//! - Repository traits (interfaces)

pub mod catalog;
pub mod entities;
pub mod matcher;
pub mod repository;
pub mod services;
pub mod value_objects;
