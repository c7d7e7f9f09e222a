//! Instructional exercises with typed inputs and outputs.
//!
//! # Scope
//!
//! - **Conditions and loops** ([`conditions`])
//!   - FizzBuzz, factorial, range sum
//!   - Triangle, rectangle-overlap and point-in-circle predicates
//!   - String and integer reversal, first unique character, interval notation
//!   - Luhn checksum, digital root, bracket balance, radix conversion
//!   - Relative-time formatting, common directory path, matrix product
//!   - Tic-tac-toe evaluation
//!
//! - **Objects** ([`objects`])
//!   - A rectangle type with an area method
//!   - JSON serialisation and typed deserialisation
//!
//! Every function is pure apart from the one-time warnings emitted through
//! `kata_common::warning`.

/// Conditions and loops.
pub mod conditions;
/// Error type shared by the exercises.
pub mod error;
/// Objects and JSON.
pub mod objects;

pub use error::ExerciseError;
