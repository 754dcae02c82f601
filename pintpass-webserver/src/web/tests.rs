use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use crate::web::{self, sqlite};

pub mod prelude {
    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };
}

pub fn setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, sqlite::Connections) {
    let connections = pintpass_db_sqlite::Connections::init(":memory:", 1).unwrap();
    pintpass_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    let db = sqlite::Connections::from(connections);
    let options = web::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        version: prelude::DUMMY_VERSION,
    };
    let rocket = web::rocket_instance(db.clone(), options);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}
