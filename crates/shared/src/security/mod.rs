pub mod bearer_token_middleware;

pub use bearer_token_middleware::BearerTokenMiddleware;
