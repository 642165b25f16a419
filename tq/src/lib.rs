//! TurnQueue - deterministic round-robin turn allocation
//!
//! TurnQueue maintains a circular rotation of named participants, each with
//! a bounded or unlimited allowance of turns, and serves them strictly in
//! arrival order. Participants with turns remaining go back to the end of
//! the rotation after each service; exhausted participants leave for good.
//!
//! # Core Concepts
//!
//! - **FIFO Fairness**: arrival order is preserved across rotations
//! - **Unlimited Turns**: an allowance of zero or less never runs out
//! - **Snapshot Returns**: callers observe the turn count as it stood when
//!   the turn was consumed, never a mutated alias
//!
//! # Modules
//!
//! - [`rotation`] - The turn rotation scheduler
//! - [`priority`] - Highest-priority-first queue with FIFO tie-breaking
//! - [`arrays`] - Multiples and in-place rotation helpers
//! - [`words`] - Symmetric pair and anagram puzzles
//! - [`census`] - Degree frequency summary over CSV files
//! - [`translator`] - Word translation lookup
//! - [`quake`] - USGS earthquake daily summary client

pub mod arrays;
pub mod census;
pub mod priority;
pub mod quake;
pub mod rotation;
pub mod translator;
pub mod words;

// Re-export commonly used types
pub use census::CensusError;
pub use priority::{PriorityError, PriorityQueue};
pub use quake::{Feature, FeatureCollection, Properties, QuakeClient, QuakeConfig, QuakeError};
pub use rotation::{Participant, ParticipantQueue, RotationError, TurnsQueue};
pub use translator::Translator;
