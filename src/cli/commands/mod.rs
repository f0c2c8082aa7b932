pub mod add;
pub mod config;
pub mod demo;
pub mod init;
pub mod list;
pub mod mark;
