mod coding;
mod random;
mod result;

pub use coding::*;
pub use random::Random;
pub use result::{Error, Result};
