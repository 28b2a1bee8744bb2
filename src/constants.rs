//! Application constants for symbology table conversion
//!
//! Standard identifiers, key fragments and column layout values shared by
//! the parser, the entry builder and the registry.

// =============================================================================
// Standards
// =============================================================================

/// Legacy standard identifiers; tables in these standards use 15-character codes
pub const LEGACY_STANDARDS: &[&str] = &["2525+b", "2525+c"];

/// Bundled table directory, resolved at compile time
pub const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tsv-tables");

// =============================================================================
// Row Layout
// =============================================================================

/// Cell separator within a row
pub const CELL_SEPARATOR: char = '\t';

/// Geometry assumed when a row omits its geometry column
pub const IMPLICIT_GEOMETRY: &str = "point";

/// Hierarchy columns (entity, entity type) copied from the previous row when empty
pub const GAP_FILL_COLUMNS: [usize; 2] = [0, 1];

/// First-cell text marking a version extension placeholder row
pub const VERSION_EXTENSION_FLAG: &str = "Version Extension Flag";

/// Legacy tables: width without / with the geometry column
pub mod legacy {
    pub const SHORT_WIDTH: usize = 8;
    pub const FULL_WIDTH: usize = 9;
    pub const GEOMETRY_COLUMN: usize = 0;
}

/// Current and modifier tables: width without / with the geometry column
pub mod current {
    pub const SHORT_WIDTH: usize = 5;
    pub const FULL_WIDTH: usize = 6;
    pub const GEOMETRY_COLUMN: usize = 3;
}

/// Modifier tables reference columns 0..=2 only
pub const MODIFIER_MIN_WIDTH: usize = 3;

// =============================================================================
// Key Fragments
// =============================================================================

pub const SYMBOL_KEY_PREFIX: &str = "symbol:";
pub const MODIFIER_KEY_PREFIX: &str = "modifier:";

/// Wildcard tail of a legacy 15-character code (modifiers, country, order of battle)
pub const LEGACY_CODE_TAIL: &str = "*****";

/// Version and context digits of a current 20-digit code
pub const CURRENT_CODE_HEAD: &str = "100";

/// HQ/task force/dummy and amplifier digits
pub const CURRENT_CODE_AMPLIFIER: &str = "000";

/// Sector 1 and sector 2 modifier digits
pub const CURRENT_CODE_MODIFIERS: &str = "0000";
