#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod adaptation;
mod cycle;
mod exercise;
mod generator;
mod plan;
mod readiness;
mod records;
mod service;
mod session;
mod training;
mod user;

pub use adaptation::*;
pub use cycle::*;
pub use exercise::*;
pub use generator::*;
pub use plan::*;
pub use readiness::*;
pub use records::*;
pub use service::*;
pub use session::*;
pub use training::*;
pub use user::*;
