pub mod chat;
pub mod profile;
pub mod recommendations;
pub mod roadmap;
pub mod user;
