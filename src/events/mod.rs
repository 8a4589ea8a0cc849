pub mod orientation;
pub mod pointer;
