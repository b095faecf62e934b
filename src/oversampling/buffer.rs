use crate::core::{Matrix, ResampleError, Result};

/// Pre-sized store for synthetic rows.
///
/// Rows enter only once fully built, and the buffer is released only when it
/// holds exactly the number of rows it was sized for.
#[derive(Debug)]
pub struct SyntheticBuffer {
    rows: Matrix,
    sources: Vec<usize>,
    capacity: usize,
    width: usize,
}

impl SyntheticBuffer {
    pub fn new(capacity: usize, width: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            sources: Vec::with_capacity(capacity),
            capacity,
            width,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a row synthesized from pool row `source`.
    pub fn push(&mut self, source: usize, row: Vec<f64>) -> Result<()> {
        if row.len() != self.width {
            return Err(ResampleError::DimensionMismatch {
                expected: self.width,
                found: row.len(),
            });
        }
        if self.rows.len() == self.capacity {
            return Err(ResampleError::config(format!(
                "synthetic buffer sized for {} rows is full",
                self.capacity
            )));
        }
        self.rows.push(row);
        self.sources.push(source);
        Ok(())
    }

    /// Synthetic rows and, for each, the pool row it was seeded from.
    pub fn finish(self) -> Result<(Matrix, Vec<usize>)> {
        if self.rows.len() != self.capacity {
            return Err(ResampleError::config(format!(
                "synthetic buffer holds {} of {} rows",
                self.rows.len(),
                self.capacity
            )));
        }
        Ok((self.rows, self.sources))
    }
}
