//! HTTP inbound adapter exposing the statistics API.

pub mod clubs;
pub mod error;
pub mod health;
pub mod national;
pub mod params;
pub mod schemas;
pub mod state;
pub mod stats_dto;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
