pub mod assignment;
pub mod chat;
pub mod document;
pub mod habit;
pub mod mood;
pub mod plan;
pub mod student;
