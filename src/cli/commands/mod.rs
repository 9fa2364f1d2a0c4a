pub mod config;
pub mod dates;
pub mod delay;
pub mod init;
pub mod report;
pub mod scan;
pub mod show;
