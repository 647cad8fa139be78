//! Response types for the NSE option-chain API.
//!
//! This module contains the strongly-typed structs used for deserializing
//! the chain payload.
//!
//! - [`option_chain`] — chain document, per-strike entries, per-side quotes

pub mod option_chain;
