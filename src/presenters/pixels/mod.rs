pub mod adapter;
pub mod frame;
pub mod presenter;
