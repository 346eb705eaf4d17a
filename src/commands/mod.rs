pub mod inspect;
pub mod list;
pub mod status;
pub mod sync;
pub mod view;
