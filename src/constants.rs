pub const DEFAULT_PLURAL_SUFFIX: &str = "s";
pub const DEFAULT_TRUNCATION_MARKER: &str = " ...";
pub const DEFAULT_UNIT_SEPARATOR: &str = ", ";

// Only used to label parse errors of relative date filters.
pub const RFC3339_PATTERN: &str = "RFC3339";

