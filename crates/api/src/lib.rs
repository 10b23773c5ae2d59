pub mod di;
pub mod domain;
pub mod handler;
pub mod middleware;
pub mod state;
