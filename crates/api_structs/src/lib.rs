mod booking;
mod customer;
mod shared;
mod status;

pub mod dtos {
    pub use crate::booking::dtos::*;
    pub use crate::customer::dtos::*;
}

pub use crate::booking::api::*;
pub use crate::shared::api::*;
pub use crate::status::api::*;
