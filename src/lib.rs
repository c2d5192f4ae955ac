pub mod api;
pub mod config_handler;
pub mod format_service;
pub mod models;
pub mod score_client;
pub mod validation;
