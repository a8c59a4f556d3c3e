//! Dense travel-time matrix.

use serde::{Deserialize, Serialize};

use crate::error::ProblemError;

/// A dense n×n travel-time matrix stored in row-major order.
///
/// Travel times are non-negative integers and need not be symmetric. The
/// diagonal is always zero.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::TravelMatrix;
///
/// let tm = TravelMatrix::from_rows(vec![
///     vec![0, 2, 9],
///     vec![2, 0, 3],
///     vec![9, 3, 0],
/// ]).unwrap();
/// assert_eq!(tm.get(0, 2), 9);
/// assert_eq!(tm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u64>>", into = "Vec<Vec<u64>>")]
pub struct TravelMatrix {
    data: Vec<u64>,
    size: usize,
}

impl TravelMatrix {
    /// Creates a travel matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Creates a travel matrix from an explicit row-major n×n grid.
    ///
    /// Fails if the data length doesn't match `size * size` or the diagonal
    /// has a non-zero entry.
    pub fn from_data(size: usize, data: Vec<u64>) -> Result<Self, ProblemError> {
        if data.len() != size * size {
            return Err(ProblemError::DimensionMismatch {
                expected: size * size,
                found: data.len(),
            });
        }
        let tm = Self { data, size };
        tm.check_diagonal()?;
        Ok(tm)
    }

    /// Creates a travel matrix from nested rows.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, ProblemError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(ProblemError::DimensionMismatch {
                    expected: size,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Self::from_data(size, data)
    }

    fn check_diagonal(&self) -> Result<(), ProblemError> {
        match (0..self.size).find(|&i| self.get(i, i) != 0) {
            Some(index) => Err(ProblemError::NonZeroDiagonal { index }),
            None => Ok(()),
        }
    }

    /// Returns the travel time from attraction `from` to attraction `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Sets the travel time from `from` to `to`. Diagonal writes are ignored.
    pub fn set(&mut self, from: usize, to: usize, time: u64) {
        if from != to {
            self.data[from * self.size + to] = time;
        }
    }

    /// Number of attractions in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the row of travel times out of `from`.
    pub fn row(&self, from: usize) -> &[u64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns the candidate closest to `from` whose travel time does not
    /// exceed `limit`.
    ///
    /// Ties go to the earliest candidate in iteration order.
    pub fn nearest_within<I>(&self, from: usize, candidates: I, limit: u64) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .filter(|&c| self.get(from, c) <= limit)
            .min_by_key(|&c| self.get(from, c))
    }
}

impl TryFrom<Vec<Vec<u64>>> for TravelMatrix {
    type Error = ProblemError;

    fn try_from(rows: Vec<Vec<u64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<TravelMatrix> for Vec<Vec<u64>> {
    fn from(tm: TravelMatrix) -> Self {
        (0..tm.size).map(|i| tm.row(i).to_vec()).collect()
    }
}
