pub mod component;
pub mod styles;
pub mod views;
