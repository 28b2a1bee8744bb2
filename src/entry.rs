//! Row to dictionary entry mapping.
//!
//! Each table variant has its own key template and metadata fields. Rows are
//! processed as a fold over one table: empty hierarchy cells are filled from
//! the preceding row, the geometry column is normalized, and the key and
//! metadata are built from fixed column positions.

use crate::config::RowPolicy;
use crate::constants::{
    CURRENT_CODE_AMPLIFIER, CURRENT_CODE_HEAD, CURRENT_CODE_MODIFIERS, GAP_FILL_COLUMNS,
    IMPLICIT_GEOMETRY, LEGACY_CODE_TAIL, MODIFIER_KEY_PREFIX, MODIFIER_MIN_WIDTH,
    SYMBOL_KEY_PREFIX, current, legacy,
};
use crate::error::{Result, SymbolTableError};
use crate::models::{Entry, Metadata, Row, TableDescriptor, TableVariant, present};
use std::path::Path;
use tracing::warn;

/// Builds entries for the rows of one table
pub struct EntryBuilder<'a> {
    table: &'a TableDescriptor,
    variant: TableVariant,
    source: &'a Path,
    policy: RowPolicy,
}

impl<'a> EntryBuilder<'a> {
    pub fn new(table: &'a TableDescriptor, source: &'a Path, policy: RowPolicy) -> Self {
        Self {
            table,
            variant: table.variant(),
            source,
            policy,
        }
    }

    pub fn variant(&self) -> TableVariant {
        self.variant
    }

    /// Map every row of the table, in order
    ///
    /// The preceding row is carried as fold state, so gap-filling never sees
    /// rows of another table and never looks back more than one row.
    pub fn build_all(&self, rows: Vec<Row>) -> Result<Vec<Entry>> {
        let capacity = rows.len();
        let (entries, _) = rows.into_iter().try_fold(
            (Vec::with_capacity(capacity), None::<Vec<String>>),
            |(mut entries, previous), row| -> Result<_> {
                let row = self.fill_gaps(row, previous.as_deref());
                let filled = row.cells.clone();
                entries.push(self.build(row)?);
                Ok((entries, Some(filled)))
            },
        )?;
        Ok(entries)
    }

    /// Copy empty entity / entity type cells from the preceding row
    pub fn fill_gaps(&self, mut row: Row, previous: Option<&[String]>) -> Row {
        let Some(previous) = previous.filter(|_| self.variant.fills_gaps()) else {
            return row;
        };

        for column in GAP_FILL_COLUMNS {
            if let (Some(cell), Some(above)) = (row.cells.get_mut(column), previous.get(column)) {
                if cell.is_empty() {
                    cell.clone_from(above);
                }
            }
        }
        row
    }

    /// Map one (already gap-filled) row to its entry
    pub fn build(&self, row: Row) -> Result<Entry> {
        let cells = self.normalize(row)?;
        Ok(match self.variant {
            TableVariant::Legacy => self.legacy_entry(&cells),
            TableVariant::Current => self.current_entry(&cells),
            TableVariant::Modifier => self.modifier_entry(&cells),
        })
    }

    /// Insert the implicit point geometry and check the row width
    fn normalize(&self, row: Row) -> Result<Vec<String>> {
        match self.variant {
            TableVariant::Legacy => self.with_geometry(
                row,
                legacy::SHORT_WIDTH,
                legacy::FULL_WIDTH,
                legacy::GEOMETRY_COLUMN,
            ),
            TableVariant::Current => self.with_geometry(
                row,
                current::SHORT_WIDTH,
                current::FULL_WIDTH,
                current::GEOMETRY_COLUMN,
            ),
            TableVariant::Modifier => {
                let mut cells = row.cells;
                if cells.len() == current::SHORT_WIDTH {
                    cells.insert(current::GEOMETRY_COLUMN, IMPLICIT_GEOMETRY.to_string());
                }
                if cells.len() < MODIFIER_MIN_WIDTH {
                    self.reject(
                        row.line,
                        format!("at least {}", MODIFIER_MIN_WIDTH),
                        cells.len(),
                    )?;
                }
                Ok(cells)
            }
        }
    }

    fn with_geometry(
        &self,
        row: Row,
        short_width: usize,
        full_width: usize,
        geometry_column: usize,
    ) -> Result<Vec<String>> {
        let width = row.width();
        let mut cells = row.cells;

        if width == short_width {
            cells.insert(geometry_column, IMPLICIT_GEOMETRY.to_string());
        } else if width != full_width {
            self.reject(
                row.line,
                format!("{} or {}", short_width, full_width),
                width,
            )?;
        }
        Ok(cells)
    }

    /// Fail in strict mode, warn and carry on in lenient mode
    fn reject(&self, line: usize, expected: String, found: usize) -> Result<()> {
        match self.policy {
            RowPolicy::Strict => Err(SymbolTableError::MalformedRow {
                path: self.source.to_path_buf(),
                line,
                expected,
                found,
            }),
            RowPolicy::Lenient => {
                warn!(
                    "{}:{} has {} columns (expected {}), using empty values for missing cells",
                    self.source.display(),
                    line,
                    found,
                    expected
                );
                Ok(())
            }
        }
    }

    fn legacy_entry(&self, cells: &[String]) -> Entry {
        let code: String = (2..=6).map(|i| cell(cells, i)).collect();
        Entry {
            key: format!(
                "{}{}{}+{}",
                SYMBOL_KEY_PREFIX, code, LEGACY_CODE_TAIL, self.table.standard
            ),
            metadata: Metadata::Legacy {
                hierarchy: present(cell(cells, 1).trim()),
                name: present(cell(cells, 7)),
                geometry: present(cell(cells, 0).to_lowercase()),
                remarks: present(cell(cells, 8)),
            },
        }
    }

    fn current_entry(&self, cells: &[String]) -> Entry {
        Entry {
            key: format!(
                "{}{}*{}*{}{}{}+{}",
                SYMBOL_KEY_PREFIX,
                CURRENT_CODE_HEAD,
                self.table.symbol_set,
                CURRENT_CODE_AMPLIFIER,
                cell(cells, 4),
                CURRENT_CODE_MODIFIERS,
                self.table.standard
            ),
            metadata: Metadata::Current {
                entity: present(cell(cells, 0)),
                entity_type: present(cell(cells, 1)),
                subtype: present(cell(cells, 2)),
                geometry: present(cell(cells, 3).to_lowercase()),
                remarks: present(cell(cells, 5)),
            },
        }
    }

    fn modifier_entry(&self, cells: &[String]) -> Entry {
        Entry {
            key: format!(
                "{}{}/{}/{}+{}",
                MODIFIER_KEY_PREFIX,
                self.table.symbol_set,
                self.table.sector.unwrap_or_default(),
                cell(cells, 2),
                self.table.standard
            ),
            metadata: Metadata::Modifier {
                modifier: present(cell(cells, 0)),
                category: present(cell(cells, 1)),
            },
        }
    }
}

fn cell(cells: &[String], index: usize) -> &str {
    cells.get(index).map_or("", String::as_str)
}
