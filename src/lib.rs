pub mod cipher;
pub mod history;
pub mod practice;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
