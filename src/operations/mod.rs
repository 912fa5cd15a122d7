pub mod boolean;
pub mod carve;
pub mod conversion;
pub mod creation;
