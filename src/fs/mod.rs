pub mod git;
pub mod tree;
pub mod walker;
