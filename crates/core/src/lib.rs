pub mod assemble;
pub mod bemify;
pub mod element;
pub mod error;
pub mod json;
pub mod normalize;
pub mod token;
pub mod types;

// Re-export commonly used types
pub use bemify::{bemify, with_block, Bemifier};
pub use error::BemifyError;
pub use token::TokenKind;
pub use types::{Flag, SuffixDescription};
