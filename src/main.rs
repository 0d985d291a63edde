use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use mcq_forge::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config.warn_if_unconfigured();

    let state = AppState::new(config.clone()).map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!(
        "starting HTTP server on {}:{} (model {})",
        config.web_server_host,
        config.web_server_port,
        config.completion_model
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(r#"%a "%r" %s %b %Ts %{x-request-id}o"#))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST"])
                    .allow_any_header()
                    .max_age(3600),
            )
            .configure(handlers::configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
