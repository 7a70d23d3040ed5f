pub mod analyzer;
pub mod position;
pub mod sort;
pub mod transform;
pub mod validator;

pub use analyzer::{count_characters, find_longest_substring, CharacterCount};
pub use position::{HttpRandomSource, LocalRandomSource, PositionService, RandomSource};
pub use sort::{quick_sort, tree_sort};
pub use transform::process;
pub use validator::Validator;
