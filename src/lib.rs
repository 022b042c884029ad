//! Resolve an EVM custom error selector against the error declarations of a
//! contract ABI.

pub mod abi;
pub mod error;
pub mod matcher;
pub mod selector;

pub use abi::{load_abi, parse_abi, AbiEntry, EntryKind, Param};
pub use error::FindError;
pub use matcher::{error_selectors, find_matching_error, ErrorDescriptor};
pub use selector::{keccak256, Selector, SelectorPrefix};
