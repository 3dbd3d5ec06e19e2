use num::Num;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// 二乗ノルム Σ(a_i^2)
    #[inline]
    pub fn norm_sq<R>(&self) -> R
    where
        R: Num + Copy,
        N: Into<R>,
    {
        self.raw_iter().fold(R::zero(), |acc, (_, v)| {
            let v: R = v.into();
            acc + v * v
        })
    }
}
