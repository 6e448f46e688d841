use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpResponse,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use log::error;
use serde_json::json;
use subtle::ConstantTimeEq;

const BEARER_PREFIX: &str = "Bearer ";

/// Rejects every request whose `Authorization` header does not carry the
/// configured token. Wrap it around an `App` or a `Scope`.
pub struct BearerTokenMiddleware {
    api_token: String,
}

impl BearerTokenMiddleware {
    pub fn new(api_token: String) -> Self {
        Self { api_token }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerTokenMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = BearerTokenMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerTokenMiddlewareService {
            service,
            api_token: self.api_token.clone(),
        }))
    }
}

pub struct BearerTokenMiddlewareService<S> {
    service: S,
    api_token: String,
}

impl<S> BearerTokenMiddlewareService<S> {
    fn is_authorized(&self, req: &ServiceRequest) -> bool {
        let Some(auth_header) = req.headers().get(AUTHORIZATION) else {
            return false;
        };
        let Ok(auth_str) = auth_header.to_str() else {
            return false;
        };
        if auth_str.len() <= BEARER_PREFIX.len()
            || !auth_str.is_char_boundary(BEARER_PREFIX.len())
        {
            return false;
        }

        let (scheme, token) = auth_str.split_at(BEARER_PREFIX.len());
        if !scheme.eq_ignore_ascii_case(BEARER_PREFIX) {
            return false;
        }

        let provided = token.as_bytes();
        let expected = self.api_token.as_bytes();
        provided.len() == expected.len() && provided.ct_eq(expected).into()
    }
}

impl<S, B> Service<ServiceRequest> for BearerTokenMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if self.is_authorized(&req) {
            let fut = self.service.call(req);
            return Box::pin(async move {
                let res = fut.await?;
                Ok(res.map_into_left_body())
            });
        }

        error!("Unauthorized request to path: {}", req.path());
        let body = json!({ "error": "Unauthorized request" });
        let response = HttpResponse::Unauthorized().json(body);
        let response = req.into_response(response).map_into_right_body();
        Box::pin(async move { Ok(response) })
    }
}
