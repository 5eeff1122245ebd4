pub mod fetch;
pub mod output;
pub mod parser;
pub mod queries;
pub mod roster;
