pub mod book;
pub mod calculator;
