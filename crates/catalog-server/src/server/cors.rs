use gateway_config::CorsConfig;
use tower_http::cors::CorsLayer;

pub(super) fn generate(config: CorsConfig) -> CorsLayer {
    let mut cors = CorsLayer::new().allow_credentials(config.allow_credentials);

    if let Some(origins) = config.allow_origins {
        cors = cors.allow_origin(origins);
    }

    if let Some(methods) = config.allow_methods {
        cors = cors.allow_methods(methods);
    }

    if let Some(max_age) = config.max_age {
        cors = cors.max_age(max_age);
    }

    cors
}
