//! Constraint-based course schedule generation.
//!
//! Given a list of desired courses — each with its catalog of offered
//! sections — this crate enumerates every combination of one section per
//! course whose meetings neither overlap nor violate campus travel-time
//! rules, scores the survivors against caller-declared preferences, and
//! returns them ranked.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CourseQuery`, `Catalog`,
//!   `MeetingInterval` (weekly minute scale), `Section`, `Schedule`
//! - **`requirements`**: Declared preferences and their match policies
//! - **`scoring`**: Time-window fit scoring and per-course section ordering
//! - **`travel`**: Travel rules and the consecutive-meeting gap validator
//! - **`planner`**: The pipeline — backtracking generator, ranker, and the
//!   `Planner` facade
//! - **`error`**: Request-level error taxonomy
//!
//! # Architecture
//!
//! The crate is a pure, synchronous library: no I/O, no suspension points,
//! no shared mutable state. Catalog acquisition and persistence are the
//! embedding application's concern; the planner consumes an in-memory
//! [`models::Catalog`] and produces serializable
//! [`models::Schedule`] values.

pub mod error;
pub mod models;
pub mod planner;
pub mod requirements;
pub mod scoring;
pub mod travel;
