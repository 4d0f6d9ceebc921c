//! Data Transfer Objects for REST request/response serialization.

pub mod common_dto;
pub mod register_dto;
pub mod sensor_dto;
pub mod status_dto;

pub use common_dto::*;
pub use register_dto::*;
pub use sensor_dto::*;
pub use status_dto::*;
