pub mod diff;
pub mod tree;
