#[macro_use]
extern crate log;

pub mod admin;
pub mod catalog;
pub mod config;
pub mod facade;
pub mod http;
pub mod models;
pub mod reconcile;
pub mod util;
pub mod xml;
