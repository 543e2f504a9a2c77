pub(crate) mod byteorder;
mod tables;

pub mod generic;
pub use generic::*;

pub(crate) use tables::T_TABLES;
