#[macro_use]
extern crate log;

mod adapters;
mod web;

pub use web::run;
