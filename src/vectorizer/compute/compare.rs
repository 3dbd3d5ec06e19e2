use std::cmp::Ordering;

use num::Num;

pub trait Compare<N>
where
    N: Num + Copy,
{
    /// コサイン類似度
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// ||a|| = sqrt(Σ(a_i^2))
    /// inputs are sparse `(index, value)` pairs ascending by index,
    /// 0.0 when either vector is all zero
    fn cosine_similarity(vec: impl Iterator<Item = (usize, N)>, other: impl Iterator<Item = (usize, N)>) -> f64;
}

#[derive(Debug)]
pub struct DefaultCompare;

/// sparse merge shared by the float impls
#[inline(always)]
fn merge_dot_norms(
    vec: impl Iterator<Item = (usize, f64)>,
    other: impl Iterator<Item = (usize, f64)>,
) -> (f64, f64, f64) {
    let mut a_it = vec.fuse();
    let mut b_it = other.fuse();
    let mut a_next = a_it.next();
    let mut b_next = b_it.next();
    let mut norm_a = 0_f64;
    let mut norm_b = 0_f64;
    let mut dot = 0_f64;
    while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
        match ia.cmp(&ib) {
            Ordering::Equal => { norm_a += va * va; norm_b += vb * vb; dot += va * vb; a_next = a_it.next(); b_next = b_it.next(); }
            Ordering::Less => { norm_a += va * va; a_next = a_it.next(); }
            Ordering::Greater => { norm_b += vb * vb; b_next = b_it.next(); }
        }
    }
    while let Some((_, va)) = a_next { norm_a += va * va; a_next = a_it.next(); }
    while let Some((_, vb)) = b_next { norm_b += vb * vb; b_next = b_it.next(); }
    (dot, norm_a, norm_b)
}

impl Compare<f64> for DefaultCompare {
    #[inline(always)]
    fn cosine_similarity(vec: impl Iterator<Item = (usize, f64)>, other: impl Iterator<Item = (usize, f64)>) -> f64 {
        let (dot, norm_a, norm_b) = merge_dot_norms(vec, other);
        if norm_a == 0.0 || norm_b == 0.0 { 0.0 } else { dot / (norm_a.sqrt() * norm_b.sqrt()) }
    }
}

impl Compare<f32> for DefaultCompare {
    #[inline(always)]
    fn cosine_similarity(vec: impl Iterator<Item = (usize, f32)>, other: impl Iterator<Item = (usize, f32)>) -> f64 {
        <DefaultCompare as Compare<f64>>::cosine_similarity(
            vec.map(|(i, v)| (i, v as f64)),
            other.map(|(i, v)| (i, v as f64)),
        )
    }
}
