pub mod accumulation;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod report;

pub use error::FitErr;
pub use model::LinearRegression;
