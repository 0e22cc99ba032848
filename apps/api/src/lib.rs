pub mod assignments;
pub mod chat;
pub mod config;
pub mod errors;
pub mod habits;
pub mod models;
pub mod mood;
pub mod routes;
pub mod state;
pub mod store;
pub mod student;
pub mod weekly_plan;
