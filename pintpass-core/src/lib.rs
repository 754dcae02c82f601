pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use pintpass_entities::{
        badge::*, checkin::*, email::*, password::*, reward::*, time::*, user::*, venue::*,
    };
}
