//! Trust boundary between description data and typed actions.
//!
//! All coercion and fallback logic lives here. Everything past this module
//! works on fully typed values and never re-validates.

mod error;
mod validator;

pub use error::{kind_name, DecodeError};
pub use validator::{
    check_enum, check_string, validate_record, Checked, ReportingValidator, Tag, Validator,
};
