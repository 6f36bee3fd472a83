// src/application/commands/images/mod.rs
mod add;
mod delete;
mod service;
mod update;

pub use service::ImageCommandService;
