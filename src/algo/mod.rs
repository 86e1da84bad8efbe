pub mod counter;
pub mod window;
