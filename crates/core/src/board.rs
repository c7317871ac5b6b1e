//! Board module - the N×N tile matrix and its pure transforms
//!
//! Cells hold tile values (`0` = empty, otherwise a power of two ≥ 2) in a flat
//! row-major vector. Every directional move is computed as a leftward
//! compaction on an oriented copy of the board:
//!
//! | direction | to canonical | cell `(r, c)` of canonical maps back to |
//! |-----------|--------------|------------------------------------------|
//! | Left  | identity            | `(r, c)` |
//! | Right | mirror rows         | `(r, n-1-c)` |
//! | Up    | transpose           | `(c, r)` |
//! | Down  | transpose, mirror   | `(n-1-c, r)` |
//!
//! [`compact_row`] is the single merge routine; it carries each tile's origin
//! column through the pass so animations always reference real source tiles.

use crate::types::{CellPos, Direction};

/// The game board - `size` columns × `size` rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<u32>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a board from rows. `None` unless the rows form a square.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return None;
            }
            cells.extend_from_slice(row);
        }
        Some(Self { size, cells })
    }

    /// Copy out as nested rows (handy for assertions and logging).
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.size).map(|r| r.to_vec()).collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn index(&self, pos: CellPos) -> Option<usize> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        Some(pos.row * self.size + pos.col)
    }

    /// Get cell value; `None` when out of bounds.
    pub fn get(&self, pos: CellPos) -> Option<u32> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Set cell value. Returns false if out of bounds.
    pub fn set(&mut self, pos: CellPos, value: u32) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(move |(i, _)| CellPos::new(i / size, i % size))
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|v| **v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|v| *v != 0)
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True if two horizontally or vertically adjacent cells hold the same
    /// non-zero value.
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for r in 0..n {
            for c in 0..n {
                let v = self.cells[r * n + c];
                if v == 0 {
                    continue;
                }
                if c + 1 < n && self.cells[r * n + c + 1] == v {
                    return true;
                }
                if r + 1 < n && self.cells[(r + 1) * n + c] == v {
                    return true;
                }
            }
        }
        false
    }

    /// Swap rows and columns.
    pub fn transposed(&self) -> Board {
        let n = self.size;
        let mut out = Board::new(n);
        for r in 0..n {
            for c in 0..n {
                out.cells[c * n + r] = self.cells[r * n + c];
            }
        }
        out
    }

    /// Reverse every row.
    pub fn mirrored(&self) -> Board {
        let mut out = self.clone();
        for row in out.cells.chunks_mut(self.size) {
            row.reverse();
        }
        out
    }

    /// Orient so that a move in `dir` becomes a leftward compaction.
    pub fn to_canonical(&self, dir: Direction) -> Board {
        match dir {
            Direction::Left => self.clone(),
            Direction::Right => self.mirrored(),
            Direction::Up => self.transposed(),
            Direction::Down => self.transposed().mirrored(),
        }
    }

    /// Inverse of [`to_canonical`](Board::to_canonical).
    pub fn from_canonical(&self, dir: Direction) -> Board {
        match dir {
            Direction::Left => self.clone(),
            Direction::Right => self.mirrored(),
            Direction::Up => self.transposed(),
            Direction::Down => self.mirrored().transposed(),
        }
    }
}

/// Map a coordinate in the canonical orientation of `dir` back to the board.
pub fn cell_from_canonical(dir: Direction, pos: CellPos, size: usize) -> CellPos {
    match dir {
        Direction::Left => pos,
        Direction::Right => CellPos::new(pos.row, size - 1 - pos.col),
        Direction::Up => CellPos::new(pos.col, pos.row),
        Direction::Down => CellPos::new(size - 1 - pos.col, pos.row),
    }
}

/// One tile of a compacted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactedTile {
    pub value: u32,
    /// Original column of the (first) source tile.
    pub source: usize,
    /// Original column of the second source tile when this is a merge.
    pub merged_with: Option<usize>,
}

/// Result of compacting one canonical row to the left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactedRow {
    /// Output tiles; tile `j` lands in column `j`.
    pub tiles: Vec<CompactedTile>,
    /// Sum of merged values.
    pub score: u32,
}

impl CompactedRow {
    /// Output row padded with zeros to `len`.
    pub fn values(&self, len: usize) -> Vec<u32> {
        let mut out: Vec<u32> = self.tiles.iter().map(|t| t.value).collect();
        out.resize(len, 0);
        out
    }
}

/// Compact and merge one row leftward.
///
/// Equal neighbours merge once per pass, scanning from the left:
/// `[2,2,2,0] → [4,2,0,0]`, `[2,2,2,2] → [4,4,0,0]`.
pub fn compact_row(row: &[u32]) -> CompactedRow {
    let mut tiles: Vec<CompactedTile> = Vec::with_capacity(row.len());
    let mut score = 0;
    let mut pending: Option<(usize, u32)> = None;

    for (col, &value) in row.iter().enumerate() {
        if value == 0 {
            continue;
        }
        match pending {
            Some((source, held)) if held == value => {
                let merged = held * 2;
                score += merged;
                tiles.push(CompactedTile {
                    value: merged,
                    source,
                    merged_with: Some(col),
                });
                pending = None;
            }
            Some((source, held)) => {
                tiles.push(CompactedTile {
                    value: held,
                    source,
                    merged_with: None,
                });
                pending = Some((col, value));
            }
            None => pending = Some((col, value)),
        }
    }

    if let Some((source, value)) = pending {
        tiles.push(CompactedTile {
            value,
            source,
            merged_with: None,
        });
    }

    CompactedRow { tiles, score }
}
