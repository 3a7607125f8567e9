pub mod batch;
pub mod client;
pub mod management;
pub mod payload;

pub use batch::Batch;
pub use client::{Endpoints, GamesApi};
