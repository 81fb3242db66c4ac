//! Core business logic - framework-agnostic operations over the planner's records.
//!
//! Every function takes a `SeaORM` connection explicitly; there is no hidden
//! global state.

/// Fund contribution ledger
pub mod contribution;
/// Gift ideas with their comments and upvotes
pub mod gift_idea;
/// Parties and the roles users hold in them
pub mod party;
/// Password hashing and the credential holder interface
pub mod password;
/// User creation and lookup
pub mod user;
