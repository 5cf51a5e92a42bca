//! Animal record model for the zoo service.
//!
//! Defines the types every other crate in the workspace depends on:
//! - [`Animal`] — a stored record (server-assigned id plus the four payload fields)
//! - [`NewAnimal`] — a validated candidate that has not been assigned an id yet
//! - [`Criteria`] — the optional filter keys a read request may supply
//!
//! and the pure operations over a record sequence: [`filter_by_query`],
//! [`find_by_id`] and [`validate_animal`]. Nothing here performs I/O.

mod animal;
mod criteria;
mod filter;
mod validate;

pub use animal::{Animal, NewAnimal};
pub use criteria::{Criteria, CriteriaError, CriteriaResult};
pub use filter::{filter_by_query, find_by_id};
pub use validate::validate_animal;
