pub mod align;
pub mod compare;
