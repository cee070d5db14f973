pub mod dump;
pub mod find;
pub mod interactive;
