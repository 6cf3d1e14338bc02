pub mod document;
pub mod outcome;
pub mod round;
pub mod score;

pub use document::*;
pub use outcome::*;
pub use round::*;
pub use score::*;
