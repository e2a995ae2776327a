pub mod buffer;
pub mod framer;
pub mod peak;
