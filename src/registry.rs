//! Table registry.
//!
//! The fixed list of source tables converted on every run. Order matters:
//! when two tables produce the same key, the later table wins.

use crate::models::{TableDescriptor, TableVariant};

/// Every source table, in conversion order
pub static TABLES: &[TableDescriptor] = &[
    // 2525B/C warfighting
    TableDescriptor::symbols("2525+b", "S", "2525b-warfighting.tsv"),
    TableDescriptor::symbols("2525+c", "S", "2525c-warfighting.tsv"),
    // 2525D
    TableDescriptor::symbols("2525+d", "10", "2525d-10-land-unit.tsv"),
    TableDescriptor::modifiers("2525+d", "10", "1", "2525d-10-land-unit-sector-1.tsv"),
    TableDescriptor::modifiers("2525+d", "10", "2", "2525d-10-land-unit-sector-2.tsv"),
    TableDescriptor::symbols("2525+d", "15", "2525d-15-land-equipment.tsv"),
    TableDescriptor::symbols("2525+d", "30", "2525d-30-sea-surface.tsv"),
    // 2525E
    TableDescriptor::symbols("2525+e", "10", "2525e-10-land-unit.tsv"),
    TableDescriptor::modifiers("2525+e", "10", "1", "2525e-10-land-unit-sector-1.tsv"),
];

pub fn tables() -> &'static [TableDescriptor] {
    TABLES
}

/// Tables of a single variant, in registry order
pub fn tables_of(variant: TableVariant) -> impl Iterator<Item = &'static TableDescriptor> {
    TABLES.iter().filter(move |table| table.variant() == variant)
}
