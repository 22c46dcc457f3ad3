//! # bf-core
//!
//! Core types and pure domain logic for BugFlow.
//!
//! This crate provides the foundational types shared across all BugFlow crates:
//! - Entity structs for projects, team members, issues, and comments
//! - Enums for project status, role, seniority, priority, and issue status
//! - The `Entity` trait tying each struct to its `EntityKind`
//! - Field-level input rules (required text, email shape, date ordering)
//! - Report aggregation (status and priority breakdowns)
//! - Canonical display labels and colours for every enum

pub mod entities;
pub mod enums;
pub mod presentation;
pub mod report;
pub mod rules;
