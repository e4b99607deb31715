use std::time::Duration;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizzz_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.is_production() {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let production = config.is_production();
    let allowed_origin = config.public_base_url.clone();
    let purge_period = Duration::from_secs(config.token_purge_interval_minutes.saturating_mul(60));

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let purge_task = state
        .registration_token_service
        .clone()
        .spawn_purge_task(purge_period);
    log::info!(
        "Purging expired registration tokens every {} minutes",
        purge_period.as_secs() / 60
    );

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = if production {
            Cors::default()
                .allowed_origin(&allowed_origin)
                .allow_any_method()
                .allow_any_header()
        } else {
            Cors::permissive()
        };

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    purge_task.abort();
    Ok(())
}
