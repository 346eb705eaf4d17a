pub mod assets;
pub mod model;
