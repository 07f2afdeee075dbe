pub mod components;
pub mod hooks;
pub mod loader;
pub mod sample;
pub mod state;
