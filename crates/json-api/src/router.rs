//! App Router

use salvo::{
    Router,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
};

use crate::{auth, carts, healthcheck, observability, products, users};

/// Catalog routes are public; cart and profile routes require a bearer token.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("cart")
                        .get(carts::get::handler)
                        .post(carts::create::handler)
                        .put(carts::update::handler)
                        .push(Router::with_path("checkout").put(carts::checkout::handler)),
                )
                .push(Router::with_path("users/{user}").get(users::get::handler)),
        )
}

/// Attach the metrics endpoint and the `OpenAPI` document for `router`.
pub(crate) fn with_docs(router: Router) -> Router {
    let doc = OpenApi::new("Kart API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    router
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}
