//! Text parsing shared by the rules: branch names, the compliance document,
//! and the central properties listing.

pub mod branch;
pub mod document;
pub mod properties;

pub use branch::is_valid_branch_name;
pub use document::{
    declared_groups, deprecated_host_lines, has_section, is_placeholder_title, service_identifier,
    title_remainder,
};
pub use properties::{lookup, parse_properties, Property};
