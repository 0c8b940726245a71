mod config;
mod content;
mod services;
mod site;
mod state;

use crate::config::Config;
use crate::content::directory::DirectoryProvider;
use crate::content::visibility::DraftVisibility;
use crate::state::AppState;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();

    let state = AppState::new(
        Arc::new(DirectoryProvider::new(&config.content_dir)),
        Arc::new(DraftVisibility),
        config.mode,
    );

    info!(
        "Serving {} (content: {}, mode: {:?})",
        config.site_dir.display(),
        config.content_dir.display(),
        config.mode
    );
    info!("Server running at http://{}:{}", config.host, config.port);

    let bind = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(config.clone()))
            .service(services::configure_routes())
            .service(site::files(&config))
    })
        .bind(bind)?
        .run()
        .await
}
