mod holes;
mod simplify;
mod subtract;

pub use simplify::{Simplify, DEFAULT_SIMPLIFY_TOLERANCE};
pub use subtract::Subtract;
