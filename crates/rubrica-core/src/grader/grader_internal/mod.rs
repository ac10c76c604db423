//! Grading pipeline split.
//!
//! Responsibility boundaries:
//! - run.rs: orchestration of one grading call
//! - prompt.rs: prompt builder/constants only
//! - unwrap.rs: empty check + markdown fence stripping
//! - validate.rs: JSON parse, shape checks, score coercion

pub(crate) mod prompt;
pub(crate) mod run;
pub(crate) mod unwrap;
pub(crate) mod validate;

#[cfg(test)]
mod tests;
