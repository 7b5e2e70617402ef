pub mod config;
mod http_layers;
mod search;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
pub(self) use search::make_search_routes;
pub use search::SearchResponse;
pub use server::{make_app, run_server};
