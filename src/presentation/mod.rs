//! Presentation Layer
//!
//! Wires use cases to their infrastructure so the binary only deals with
//! paths and config.
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)

pub mod factory;

pub use factory::{
    create_calc_use_case, create_convert_use_case, create_validate_use_case,
    create_vesting_use_case,
};
