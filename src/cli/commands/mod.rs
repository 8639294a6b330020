pub mod clock;
pub mod config;
pub mod db;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod status;
pub mod user;
pub mod zone;
