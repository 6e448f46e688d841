use crate::api::error_responder::error_responder;
use crate::api::routes::card::card_routes;
use crate::api::routes::list::list_routes;
use crate::config::Environment;
use crate::error::ApiError;
use crate::logging::access_logger;
use crate::store::core::StoreContext;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{web, web::Data, App, HttpResponse, HttpServer};
use anyhow::Error;
use log::{error, info};
use serde_json::json;
use shared::security::BearerTokenMiddleware;
use std::sync::Arc;

const JSON_PAYLOAD_LIMIT: usize = 2_097_152;

pub struct AppState {
    pub store_context: Arc<StoreContext>,
    pub environment: Environment,
    pub public_url: String,
}

impl AppState {
    pub fn new(
        store_context: Arc<StoreContext>,
        environment: Environment,
        public_url: String,
    ) -> Self {
        Self {
            store_context,
            environment,
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    /// Canonical url of a resource, used for `Location` headers.
    pub fn location_for(&self, resource: &str, id: &str) -> String {
        format!("{}/{}/{}", self.public_url, resource, id)
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, req| {
            error!("Rejected request body for {}: {err}", req.path());
            ApiError::InvalidData.into()
        })
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Resource not found" }))
}

/// Builds the full application: access log, authorization gate, error
/// responder and the card/list routes.
pub fn create_app(
    app_state: Data<AppState>,
    api_token: String,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    let environment = app_state.environment;
    App::new()
        .app_data(app_state)
        .app_data(json_config())
        .wrap(error_responder(environment))
        .wrap(BearerTokenMiddleware::new(api_token))
        .wrap(access_logger(environment))
        .wrap(NormalizePath::new(TrailingSlash::Trim))
        .service(card_routes())
        .service(list_routes())
        .default_service(web::route().to(not_found))
}

pub async fn start_server(
    host: &str,
    port: u16,
    app_state: AppState,
    api_token: String,
) -> Result<(), Error> {
    info!("Starting server at http://{host}:{port}");
    let app_state = Data::new(app_state);

    HttpServer::new(move || create_app(app_state.clone(), api_token.clone()))
        .bind((host, port))?
        .run()
        .await?;
    Ok(())
}
