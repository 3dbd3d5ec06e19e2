pub mod linguistic;
pub mod math;
pub mod normalizer;
pub mod pii;
pub mod scaler;
