mod utils;

pub use utils::*;
