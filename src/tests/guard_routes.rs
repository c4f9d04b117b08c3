// Guarded axum routes: level rules and path attribute rules.

#[cfg(test)]
mod test {
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use axum::Router;
    use http::header::COOKIE;
    use http::StatusCode;
    use std::net::SocketAddr;

    use crate::client::verifier::tests::{claims_for, sign, test_verifier};
    use crate::guard::{require_level, require_path_val, AuthGuard};
    use crate::tests::common::{build_reqwest_client, spawn_axum, MemoryAuthorizer};

    async fn spawn_guarded() -> (tokio::task::JoinHandle<()>, SocketAddr) {
        let authorizer = MemoryAuthorizer::default()
            .with_user("admin@example.com", "admin", &[("user_id", "1")])
            .with_user("user@example.com", "user", &[("user_id", "2")])
            .with_user("nobody@example.com", "user", &[]);
        let guard = AuthGuard::new(test_verifier(), authorizer);

        let admin = Router::new()
            .route("/admin", get(|| async { "admin area" }))
            .route_layer(from_fn_with_state(guard.allow_only(["admin"]), require_level::<MemoryAuthorizer>));
        let members = Router::new()
            .route("/members", get(|| async { "members area" }))
            .route_layer(from_fn_with_state(guard.allow_only(["admin", "user"]), require_level::<MemoryAuthorizer>));
        let profile = Router::new()
            .route("/users/{user_id}", get(|| async { "profile" }))
            .route_layer(from_fn_with_state(guard.allow_path_val("user_id"), require_path_val::<MemoryAuthorizer>));
        let misrouted = Router::new()
            .route("/me", get(|| async { "me" }))
            .route_layer(from_fn_with_state(guard.allow_path_val("user_id"), require_path_val::<MemoryAuthorizer>));

        spawn_axum(admin.merge(members).merge(profile).merge(misrouted)).await
    }

    async fn get_as(addr: SocketAddr, path: &str, email: Option<&str>) -> (StatusCode, String) {
        let mut request = build_reqwest_client().get(format!("http://{}{}", addr, path));
        if let Some(email) = email {
            let token = sign(&claims_for(email, 600));
            request = request.header(COOKIE, format!("access_token={}", token));
        }
        let response = request.send().await.expect("request failed");
        let status = response.status();
        (status, response.text().await.unwrap())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn level_rules() {
        let (handle, addr) = spawn_guarded().await;

        assert_eq!(get_as(addr, "/admin", Some("admin@example.com")).await, (StatusCode::OK, "admin area".to_owned()));
        assert_eq!(get_as(addr, "/members", Some("user@example.com")).await.0, StatusCode::OK);

        let (status, body) = get_as(addr, "/admin", Some("user@example.com")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, "user is not allowed to access this resource");

        let (status, body) = get_as(addr, "/admin", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "user is not authenticated");

        // unknown to the authorizer
        let (status, body) = get_as(addr, "/admin", Some("stranger@example.com")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "internal server error");

        handle.abort();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn forged_token_is_rejected() {
        let (handle, addr) = spawn_guarded().await;

        let response = build_reqwest_client()
            .get(format!("http://{}/admin", addr))
            .header(COOKIE, "access_token=forged.token.value")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.text().await.unwrap(), "access token is invalid");

        let expired = sign(&claims_for("admin@example.com", -5));
        let response = build_reqwest_client()
            .get(format!("http://{}/admin", addr))
            .header(COOKIE, format!("access_token={}", expired))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.text().await.unwrap(), "access token is invalid");

        handle.abort();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn path_value_rules() {
        let (handle, addr) = spawn_guarded().await;

        assert_eq!(get_as(addr, "/users/2", Some("user@example.com")).await, (StatusCode::OK, "profile".to_owned()));
        assert_eq!(get_as(addr, "/users/1", Some("user@example.com")).await.0, StatusCode::FORBIDDEN);
        assert_eq!(get_as(addr, "/users/2", None).await.0, StatusCode::UNAUTHORIZED);

        // authorizer has no user_id for this user
        assert_eq!(get_as(addr, "/users/2", Some("nobody@example.com")).await.0, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, body) = get_as(addr, "/me", Some("user@example.com")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "user_id is not set in query path");

        handle.abort();
    }
}
