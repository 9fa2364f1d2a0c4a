pub mod ticket;
pub mod update;
