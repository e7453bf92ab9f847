//! Screen buffer: a grid of material codes painted one column at a time.

use crate::config::ViewConfig;
use crate::projection::material_at;
use crate::scanner::{ColumnHit, ColumnSink};
use crate::types::Material;

/// `columns x rows` grid of materials, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenBuffer {
    columns: u16,
    rows: u16,
    view: ViewConfig,
    cells: Vec<Material>,
}

impl ScreenBuffer {
    pub fn new(cfg: &ViewConfig) -> Self {
        let len = cfg.columns as usize * cfg.rows as usize;
        Self {
            columns: cfg.columns,
            rows: cfg.rows,
            view: *cfg,
            cells: vec![Material::Sky; len],
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[inline(always)]
    fn idx(&self, column: u16, row: u16) -> Option<usize> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(row as usize * self.columns as usize + column as usize)
    }

    pub fn get(&self, column: u16, row: u16) -> Option<Material> {
        self.idx(column, row).map(|i| self.cells[i])
    }

    /// One row of materials, left to right.
    pub fn row(&self, row: u16) -> &[Material] {
        if row >= self.rows {
            return &[];
        }
        let start = row as usize * self.columns as usize;
        &self.cells[start..start + self.columns as usize]
    }

    /// Paint every row of `column` for a wall of `height` rows.
    ///
    /// Out-of-range columns are ignored.
    pub fn draw_column(&mut self, column: u16, height: u16, is_edge: bool) {
        if column >= self.columns {
            return;
        }
        for row in 0..self.rows {
            let i = row as usize * self.columns as usize + column as usize;
            self.cells[i] = material_at(row, height, is_edge, &self.view);
        }
    }

    /// Material codes as nested rows, mainly for tests and traces.
    pub fn codes(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|r| self.row(r).iter().map(|m| m.code()).collect())
            .collect()
    }
}

impl ColumnSink for ScreenBuffer {
    fn column(&mut self, hit: &ColumnHit) {
        self.draw_column(hit.column, hit.height, hit.is_edge);
    }
}
