use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::{HeaderMap, StatusCode};
use tracing::{debug, error};

use crate::client::errors::ClaimsError;
use crate::client::request::claims_from_headers;
use crate::client::verifier::{TokenVerifier, UserClaims};
use crate::guard::authorizer::Authorizer;

const NOT_AUTHENTICATED: &str = "user is not authenticated";
const INVALID_TOKEN: &str = "access token is invalid";
const FORBIDDEN: &str = "user is not allowed to access this resource";
const INTERNAL: &str = "internal server error";

/// Verifies the caller's access token and consults the [`Authorizer`].
///
/// Attach a rule to routes with `axum::middleware::from_fn_with_state`:
///
/// ```ignore
/// let admin = guard.allow_only(["admin"]);
/// Router::new()
///     .route("/admin", get(handler))
///     .route_layer(middleware::from_fn_with_state(admin, require_level::<MyAuthorizer>));
/// ```
pub struct AuthGuard<A> {
    verifier: TokenVerifier,
    authorizer: A,
}

impl<A: Authorizer> AuthGuard<A> {
    pub fn new(verifier: TokenVerifier, authorizer: A) -> Arc<Self> {
        Arc::new(Self { verifier, authorizer })
    }

    /// Rule: the user's level must be one of `levels`.
    pub fn allow_only<I, S>(self: &Arc<Self>, levels: I) -> AllowOnly<A>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AllowOnly {
            guard: self.clone(),
            levels: levels.into_iter().map(Into::into).collect(),
        }
    }

    /// Rule: the user's attribute `name` must equal the path parameter `name`.
    pub fn allow_path_val(self: &Arc<Self>, name: impl Into<String>) -> AllowPathVal<A> {
        AllowPathVal {
            guard: self.clone(),
            name: Arc::from(name.into()),
        }
    }

    fn authenticate(&self, headers: &HeaderMap) -> Result<UserClaims, Response> {
        claims_from_headers(&self.verifier, headers).map_err(|err| {
            let body = match err {
                ClaimsError::TokenNotFound => NOT_AUTHENTICATED,
                ClaimsError::InvalidToken => INVALID_TOKEN,
            };
            (StatusCode::UNAUTHORIZED, body).into_response()
        })
    }
}

pub struct AllowOnly<A> {
    guard: Arc<AuthGuard<A>>,
    levels: Arc<[String]>,
}

impl<A> Clone for AllowOnly<A> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            levels: self.levels.clone(),
        }
    }
}

pub struct AllowPathVal<A> {
    guard: Arc<AuthGuard<A>>,
    name: Arc<str>,
}

impl<A> Clone for AllowPathVal<A> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            name: self.name.clone(),
        }
    }
}

/// Middleware enforcing an [`AllowOnly`] rule.
pub async fn require_level<A: Authorizer>(
    State(rule): State<AllowOnly<A>>,
    request: Request,
    next: Next,
) -> Response {
    let claims = match rule.guard.authenticate(request.headers()) {
        Ok(claims) => claims,
        Err(response) => return response,
    };

    let level = match rule.guard.authorizer.level(&claims.email).await {
        Ok(level) => level,
        Err(e) => {
            error!("failed to get user security level: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL).into_response();
        }
    };

    if !rule.levels.contains(&level) {
        debug!("user level '{}' not in {:?}", level, rule.levels);
        return (StatusCode::FORBIDDEN, FORBIDDEN).into_response();
    }

    next.run(request).await
}

/// Middleware enforcing an [`AllowPathVal`] rule. Needs `route_layer` so the
/// path parameters are already matched.
pub async fn require_path_val<A: Authorizer>(
    State(rule): State<AllowPathVal<A>>,
    params: Result<Path<HashMap<String, String>>, PathRejection>,
    request: Request,
    next: Next,
) -> Response {
    let claims = match rule.guard.authenticate(request.headers()) {
        Ok(claims) => claims,
        Err(response) => return response,
    };

    let user_val = match rule.guard.authorizer.attribute(&rule.name, &claims.email).await {
        Ok(value) => value,
        Err(e) => {
            error!("failed to get user attribute: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL).into_response();
        }
    };

    let path_val = params
        .ok()
        .and_then(|Path(mut params)| params.remove(rule.name.as_ref()))
        .filter(|value| !value.is_empty());
    let Some(path_val) = path_val else {
        return (StatusCode::BAD_REQUEST, format!("{} is not set in query path", rule.name)).into_response();
    };

    if user_val != path_val {
        return (StatusCode::FORBIDDEN, FORBIDDEN).into_response();
    }

    next.run(request).await
}
