pub mod spans;
pub mod subscriber;
