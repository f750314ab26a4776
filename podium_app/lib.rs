// CreatePlayer
// UpdatePlayer
// GetPlayerById
// GetTopPlayers

pub mod app;
pub mod cache;
pub mod command_handlers;
pub mod config;
pub mod cqrs;
pub mod helpers;
pub mod queries_handlers;
pub mod repository;
pub mod storage;

pub mod test_utils;
