pub mod chronicle;
pub mod sparklines;
pub mod status;
