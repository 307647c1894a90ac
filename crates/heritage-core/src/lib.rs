pub mod config;
pub mod logging;

pub mod catalog;
pub mod fetch;
pub mod presenter;
pub mod resolver;
pub mod url_model;
pub mod viewer;
