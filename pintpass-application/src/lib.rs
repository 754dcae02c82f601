#[macro_use]
extern crate log;

mod check_in;
mod redeem_reward;

pub mod prelude {
    pub use super::{check_in::*, redeem_reward::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use pintpass_core::{entities::*, usecases};


pub(crate) mod sqlite {
    pub use pintpass_db_sqlite::Connections;
}
