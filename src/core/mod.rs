pub mod calculator;
pub mod config;
pub mod dates;
pub mod extract;
pub mod logic;
pub mod report;
pub mod scan;
