pub mod scheduler;
pub mod session;
