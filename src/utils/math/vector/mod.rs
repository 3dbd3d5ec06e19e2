pub mod math;

use std::fmt::{self, Debug};

use num::Num;
use serde::{Deserialize, Serialize};

/// ZeroSpVec は 0 要素を疎とした疎ベクトル
/// Sparse vector that stores only the nonzero entries.
///
/// `inds` holds the dimension of each stored value and is kept strictly
/// ascending; `len` is the logical (dense) length.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            inds: Vec::new(),
            vals: Vec::new(),
            len: 0,
        }
    }

    /// `cap` is the expected number of nonzero entries
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// number of nonzero entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// Append one dense element; zeros only extend the length
    #[inline]
    pub fn push(&mut self, elem: N) {
        if !elem.is_zero() {
            self.inds.push(self.len);
            self.vals.push(elem);
        }
        self.len += 1;
    }

    /// Value at a dense index, zero when not stored or out of range
    #[inline]
    pub fn get(&self, index: usize) -> N {
        match self.inds.binary_search(&index) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    /// `(index, value)` pairs of the nonzero entries, ascending by index
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter().copied())
    }

    /// Divide every stored value in place
    #[inline]
    pub fn div_scalar(&mut self, divisor: N) {
        for v in self.vals.iter_mut() {
            *v = *v / divisor;
        }
    }

    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> From<Vec<N>> for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn from(dense: Vec<N>) -> Self {
        let mut vec = Self::with_capacity(dense.len());
        for elem in dense {
            vec.push(elem);
        }
        vec.shrink_to_fit();
        vec
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Num + Copy + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "ZeroSpVec(len: {}, nnz: {}) [", self.len, self.nnz())?;
            for (i, v) in self.raw_iter() {
                writeln!(f, "    {i}: {v:?}")?;
            }
            write!(f, "]")
        } else {
            f.debug_map().entries(self.raw_iter()).finish()
        }
    }
}
