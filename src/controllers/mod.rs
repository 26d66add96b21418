pub mod batch;
pub mod speak;
