//! Table field: a fixed grid of typed cells.
//!
//! Cell-level typing is a proper tagged variant instead of tag strings
//! embedded in cell text, so the grid serializes without any string
//! parsing on the way back in.

use serde::{Deserialize, Serialize};

/// One cell of a table field.
///
/// Cell values are presentation-layer content; submission validation treats
/// the whole table as a single completion flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellValue {
    Text {
        value: String,
    },
    Checkbox {
        checked: bool,
    },
    Select {
        options: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selected: Option<String>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<f64>,
    },
    Date {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text {
            value: String::new(),
        }
    }
}

/// Tabular data entry grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableAttributes {
    pub rows: u32,
    pub columns: u32,
    pub required: bool,
    pub column_headers: Vec<String>,
    pub cells: Vec<Vec<CellValue>>,
}

impl Default for TableAttributes {
    fn default() -> Self {
        let mut attrs = Self {
            rows: 3,
            columns: 3,
            required: false,
            column_headers: (1..=3).map(|i| format!("Column {i}")).collect(),
            cells: Vec::new(),
        };
        attrs.normalize();
        attrs
    }
}

impl TableAttributes {
    /// Reshape headers and cells to match `rows` x `columns`, keeping
    /// existing content where it still fits.
    pub fn normalize(&mut self) {
        let rows = self.rows as usize;
        let columns = self.columns as usize;

        self.column_headers.truncate(columns);
        for i in self.column_headers.len()..columns {
            self.column_headers.push(format!("Column {}", i + 1));
        }

        self.cells.truncate(rows);
        for row in &mut self.cells {
            row.truncate(columns);
            row.resize_with(columns, CellValue::default);
        }
        while self.cells.len() < rows {
            self.cells
                .push((0..columns).map(|_| CellValue::default()).collect());
        }
    }

    /// True when the grid shape matches the declared dimensions.
    pub fn is_normalized(&self) -> bool {
        self.column_headers.len() == self.columns as usize
            && self.cells.len() == self.rows as usize
            && self
                .cells
                .iter()
                .all(|row| row.len() == self.columns as usize)
    }
}
