use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{error, info};

use tt_api::app::{create_app, AppState};
use tt_core::services::{TokenConfig, TokenService};
use tt_infra::{create_pool, MySqlTodoRepository, MySqlUserRepository};
use tt_shared::config::{auth::JwtConfig, database::DatabaseConfig, server::ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting TaskTrack API server");

    // The signing secret is mandatory. Refusing to start beats running
    // with a guessable default.
    let jwt_config = match JwtConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let token_service = match TokenService::new(TokenConfig::from(jwt_config)) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            error!("token service setup failed: {e}");
            std::process::exit(1);
        }
    };

    let database_config = DatabaseConfig::from_env();
    let pool = match create_pool(&database_config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("database connection failed: {e}");
            std::process::exit(1);
        }
    };

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let todo_repository = Arc::new(MySqlTodoRepository::new(pool));

    let app_state = web::Data::new(AppState::new(
        user_repository,
        todo_repository,
        token_service,
    ));

    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
