mod assets;

pub mod chat;
pub mod config;
pub mod query;
pub mod resolver;
pub mod server;

#[cfg(test)]
mod test_utils;

pub use crate::assets::get_data_dir;
