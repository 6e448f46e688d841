pub(crate) mod error_responder;
pub(crate) mod routes;
pub(crate) mod server;
