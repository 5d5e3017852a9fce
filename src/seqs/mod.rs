pub mod array;
pub mod ring;
