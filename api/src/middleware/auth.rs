//! Bearer-token access gate for protected endpoints.
//!
//! Every request passing through the gate must carry a valid
//! `Authorization: Bearer <token>` header whose subject still exists in
//! the user store. On success the full user record is injected into the
//! request extensions as [`RequestIdentity`].

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use tt_core::{
    domain::entities::user::User,
    errors::{AuthError, DomainError},
    repositories::UserRepository,
    services::TokenService,
};

use crate::handlers::ApiError;

/// Authenticated caller context injected into requests by [`AuthGate`].
#[derive(Debug, Clone)]
pub struct RequestIdentity {
    /// The full user record the token's subject resolved to.
    pub user: User,
}

/// Access gate middleware factory.
///
/// Holds the verifier and the user store it resolves token subjects
/// against. There is no fallback configuration path: callers wire both
/// dependencies explicitly at startup.
pub struct AuthGate {
    token_service: Arc<TokenService>,
    user_repository: Arc<dyn UserRepository>,
}

impl AuthGate {
    pub fn new(token_service: Arc<TokenService>, user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            token_service,
            user_repository,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
            user_repository: Arc::clone(&self.user_repository),
        }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
    user_repository: Arc<dyn UserRepository>,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);
        let user_repository = Arc::clone(&self.user_repository);

        Box::pin(async move {
            // Header shape is checked before any token or store work.
            let token = match extract_bearer_token(&req) {
                Ok(token) => token,
                Err(e) => return Err(ApiError::from(DomainError::Auth(e)).into()),
            };

            let user_id = match token_service.verify(&token) {
                Ok(user_id) => user_id,
                Err(e) => return Err(ApiError::from(e).into()),
            };

            // A valid signature is not enough: the subject must still
            // exist, so tokens outlive their users by at most one lookup.
            let user = match user_repository.find_by_id(user_id).await {
                Ok(Some(user)) => user,
                Ok(None) => {
                    return Err(ApiError::from(DomainError::Auth(AuthError::UnknownUser)).into())
                }
                Err(e) => return Err(ApiError::from(e).into()),
            };

            req.extensions_mut().insert(RequestIdentity { user });

            service.call(req).await
        })
    }
}

/// Pulls the token out of `Authorization: Bearer <token>`.
///
/// The header value must split on a single space into exactly two
/// parts, the first being the literal `Bearer`. Anything else is
/// malformed; an absent header is reported separately.
fn extract_bearer_token(req: &ServiceRequest) -> Result<String, AuthError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?;

    let value = header.to_str().map_err(|_| AuthError::MalformedAuthHeader)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(AuthError::MalformedAuthHeader),
    }
}

impl FromRequest for RequestIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<RequestIdentity>()
            .cloned()
            .ok_or_else(|| ApiError::from(DomainError::Auth(AuthError::MissingAuthHeader)).into());

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn request_with_header(value: &str) -> ServiceRequest {
        TestRequest::default()
            .insert_header((AUTHORIZATION, value))
            .to_srv_request()
    }

    #[test]
    fn accepts_well_formed_bearer_header() {
        let req = request_with_header("Bearer abc.def.ghi");
        assert_eq!(
            extract_bearer_token(&req).unwrap(),
            "abc.def.ghi".to_string()
        );
    }

    #[test]
    fn missing_header_is_distinct_from_malformed() {
        let req = TestRequest::default().to_srv_request();
        assert!(matches!(
            extract_bearer_token(&req),
            Err(AuthError::MissingAuthHeader)
        ));
    }

    #[test]
    fn rejects_wrong_scheme() {
        let req = request_with_header("Token abc.def.ghi");
        assert!(matches!(
            extract_bearer_token(&req),
            Err(AuthError::MalformedAuthHeader)
        ));
    }

    #[test]
    fn rejects_missing_token_part() {
        let req = request_with_header("Bearer");
        assert!(matches!(
            extract_bearer_token(&req),
            Err(AuthError::MalformedAuthHeader)
        ));
    }

    #[test]
    fn rejects_extra_parts() {
        let req = request_with_header("Bearer abc def");
        assert!(matches!(
            extract_bearer_token(&req),
            Err(AuthError::MalformedAuthHeader)
        ));
    }

    #[test]
    fn rejects_lowercase_scheme() {
        let req = request_with_header("bearer abc.def.ghi");
        assert!(matches!(
            extract_bearer_token(&req),
            Err(AuthError::MalformedAuthHeader)
        ));
    }
}
