mod config;
mod db;
mod error;
mod services;
#[cfg(test)]
mod testing;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

use crate::config::Config;
use crate::db::Db;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();

    let db = Db::open(&config.db_path).map_err(|e| {
        std::io::Error::other(format!("cannot open database {}: {}", config.db_path, e))
    })?;

    info!("Server running at http://{}:{}", config.host, config.port);

    let host = config.host.clone();
    let port = config.port;
    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(web::Data::new(db.clone()))
            .service(services::cartellini::configure_routes())
            .service(services::link_types::configure_routes())
            .service(services::links::configure_routes())
    })
    .bind((host, port))?
    .run()
    .await
}
