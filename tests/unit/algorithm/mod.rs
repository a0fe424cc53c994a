pub mod bubble;
pub mod quick;
