pub mod direction;
pub mod mapped;
