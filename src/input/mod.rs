//! Input handling ahead of the generator
//!
//! - [`validation`]: parses raw text and enforces the input contract
//! - [`samples`]: built-in samples and random demo input
//!
//! Everything here runs before [`generate`](crate::trace::generate); the generator
//! itself trusts what it is given.

pub mod samples;
pub mod validation;

pub use samples::{format_input, random_input, Sample, SAMPLES};
pub use validation::{parse_input, validate_sequence, InputError, MAX_ELEMENTS, MAX_ELEMENT_LEN};
