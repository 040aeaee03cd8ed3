//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use tt_core::repositories::{TodoRepository, UserRepository};
use tt_core::services::{AuthService, TodoService, TokenService};

use crate::middleware::{create_cors, AuthGate};
use crate::routes::auth::{login, register};
use crate::routes::health::health_check;
use crate::routes::todos::{create_todo, delete_todo, get_todo, list_todos, update_todo};
use crate::routes::users::user_profile;

/// Shared application state, generic over the repository backends so
/// tests can run the full app against in-memory stores.
pub struct AppState<U, T>
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    pub auth_service: Arc<AuthService<U>>,
    pub todo_service: Arc<TodoService<T>>,
    pub token_service: Arc<TokenService>,
    pub user_repository: Arc<U>,
}

impl<U, T> AppState<U, T>
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    pub fn new(
        user_repository: Arc<U>,
        todo_repository: Arc<T>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                Arc::clone(&user_repository),
                Arc::clone(&token_service),
            )),
            todo_service: Arc::new(TodoService::new(todo_repository)),
            token_service,
            user_repository,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, T>(
    app_state: web::Data<AppState<U, T>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody<Error: std::fmt::Debug>>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    let gate = AuthGate::new(
        Arc::clone(&app_state.token_service),
        Arc::clone(&app_state.user_repository) as Arc<dyn UserRepository>,
    );

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(create_cors())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                // Public auth routes
                .route("/register", web::post().to(register::<U, T>))
                .route("/login", web::post().to(login::<U, T>))
                // Everything else sits behind the access gate
                .service(
                    web::scope("")
                        .wrap(gate)
                        .service(
                            web::resource("/todos")
                                .route(web::get().to(list_todos::<U, T>))
                                .route(web::post().to(create_todo::<U, T>)),
                        )
                        .service(
                            web::resource("/todos/{id}")
                                .route(web::get().to(get_todo::<U, T>))
                                .route(web::put().to(update_todo::<U, T>))
                                .route(web::patch().to(update_todo::<U, T>))
                                .route(web::delete().to(delete_todo::<U, T>)),
                        )
                        .route("/user-profile", web::get().to(user_profile)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
