use crate::config::Environment;
use actix_web::{
    dev::ServiceResponse,
    http::StatusCode,
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    HttpResponse,
};
use log::error;
use serde_json::json;

/// Rewrites every 500 produced further down the stack. Production gets a
/// generic body; other environments get the error text and its debug form.
pub(crate) fn error_responder<B: 'static>(environment: Environment) -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(
        StatusCode::INTERNAL_SERVER_ERROR,
        move |res: ServiceResponse<B>| render_internal_error(res, environment),
    )
}

fn render_internal_error<B>(
    res: ServiceResponse<B>,
    environment: Environment,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (message, detail) = match res.response().error() {
        Some(err) => (err.to_string(), format!("{err:?}")),
        None => (
            "Internal Server Error".to_string(),
            "handler returned 500 without an error".to_string(),
        ),
    };

    let body = if environment.is_production() {
        json!({ "error": { "message": "server error" } })
    } else {
        let req = res.request();
        error!("{} {}: {detail}", req.method(), req.path());
        json!({ "message": message, "error": detail })
    };

    let (req, _) = res.into_parts();
    let response = HttpResponse::InternalServerError().json(body);
    let res = ServiceResponse::new(req, response).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}
