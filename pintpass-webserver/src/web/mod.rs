use rocket::{config::Config as RocketCfg, Build, Rocket, Route};

pub mod api;
mod guards;
mod sqlite;

#[cfg(test)]
pub mod tests;

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    db: sqlite::Connections,
    options: InstanceOptions,
) -> Rocket<Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(guards::Version(version));
    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    connections: pintpass_db_sqlite::Connections,
    address: std::net::IpAddr,
    port: u16,
    version: &'static str,
) {
    let rocket_cfg = RocketCfg {
        address,
        port,
        ..RocketCfg::default()
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        version,
    };
    let instance = rocket_instance(connections.into(), options);
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
