#[cfg(feature = "csr")]
pub mod app;
pub mod brief;
pub mod download;
pub mod portfolio;
pub mod view_state;
