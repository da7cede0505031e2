pub mod logger;
pub mod progress;
