mod levels;
mod order;
mod owned_iter;
mod ref_iter;

pub use levels::*;
pub use order::*;
pub use owned_iter::*;
pub use ref_iter::*;
