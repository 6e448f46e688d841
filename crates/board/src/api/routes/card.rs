use crate::api::server::AppState;
use crate::error::ApiError;
use actix_web::{
    http::header::LOCATION,
    web::{self, delete, get, post, Data},
    HttpResponse, Scope,
};
use log::{error, info};
use shared::models::card::{Card, CardRequest};

async fn get_cards(app_state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let cards = app_state.store_context.card_store.get_cards()?;
    Ok(HttpResponse::Ok().json(cards))
}

async fn get_card(
    id: web::Path<String>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    match app_state.store_context.card_store.get_card(&id)? {
        Some(card) => Ok(HttpResponse::Ok().json(card)),
        None => {
            error!("Card with id {id} not found.");
            Err(ApiError::NotFound("Card Not Found"))
        }
    }
}

async fn create_card(
    card: web::Json<CardRequest>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let new_card = card.into_inner().validate().map_err(|e| {
        error!("{e}");
        ApiError::InvalidData
    })?;

    let card = Card::from(new_card);
    let card_store = &app_state.store_context.card_store;
    card_store.add_card(card.clone())?;
    info!("Card with {} was created", card.id);

    Ok(HttpResponse::Created()
        .insert_header((LOCATION, app_state.location_for("card", &card.id)))
        .json(card))
}

async fn delete_card(
    id: web::Path<String>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let card_store = &app_state.store_context.card_store;
    if card_store.delete_card(&id)?.is_none() {
        error!("Card with id {id} not found.");
        return Err(ApiError::NotFound("Not found"));
    }

    info!("Card with id {id} deleted.");
    Ok(HttpResponse::NoContent().finish())
}

pub(crate) fn card_routes() -> Scope {
    web::scope("/card")
        .route("", get().to(get_cards))
        .route("", post().to(create_card))
        .route("/{id}", get().to(get_card))
        .route("/{id}", delete().to(delete_card))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::helper::{capture_logs, create_test_app_state, logged};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use actix_web::App;
    use serde_json::json;
    use shared::models::List;

    #[actix_web::test]
    async fn test_get_cards_when_empty() {
        let app_state = create_test_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(card_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/card").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!([]));
    }

    #[actix_web::test]
    async fn test_create_card() {
        let app_state = create_test_app_state();
        let card_store = app_state.store_context.card_store.clone();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(card_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/card")
            .set_json(json!({"title": "Task One", "content": "This is card one"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let location = resp.headers().get(LOCATION).cloned().unwrap();
        let card: Card = test::read_body_json(resp).await;
        assert_eq!(card.title, "Task One");
        assert_eq!(card.content, "This is card one");
        let expected = format!("/card/{}", card.id);
        assert!(location.to_str().unwrap().ends_with(&expected));

        assert_eq!(card_store.get_cards().unwrap(), vec![card]);
    }

    #[actix_web::test]
    async fn test_created_card_is_visible() {
        let app_state = create_test_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(card_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/card")
            .set_json(json!({"title": "Task One", "content": "This is card one"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let created: Card = test::read_body_json(resp).await;

        let req = test::TestRequest::get()
            .uri(&format!("/card/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched: Card = test::read_body_json(resp).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::get().uri("/card").to_request();
        let resp = test::call_service(&app, req).await;
        let all: Vec<Card> = test::read_body_json(resp).await;
        assert_eq!(all, vec![created]);
    }

    #[actix_web::test]
    async fn test_create_card_ids_are_unique() {
        let app_state = create_test_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(card_routes()),
        )
        .await;

        let mut ids = Vec::new();
        for i in 1..=3 {
            let req = test::TestRequest::post()
                .uri("/card")
                .set_json(json!({"title": format!("Task {i}"), "content": "same"}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            let card: Card = test::read_body_json(resp).await;
            ids.push(card.id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[actix_web::test]
    async fn test_create_card_with_missing_fields() {
        let app_state = create_test_app_state();
        let card_store = app_state.store_context.card_store.clone();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(card_routes()),
        )
        .await;

        let payloads = vec![
            json!({"content": "no title"}),
            json!({"title": "no content"}),
            json!({"title": "", "content": "empty title"}),
            json!({"title": "empty content", "content": ""}),
            json!({}),
        ];
        for payload in payloads {
            let req = test::TestRequest::post()
                .uri("/card")
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(
                resp.status(),
                StatusCode::BAD_REQUEST,
                "payload: {payload}"
            );
            let body = test::read_body(resp).await;
            assert_eq!(body, "Invalid data");
        }

        assert!(card_store.get_cards().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_missing_title_is_logged() {
        capture_logs();
        let app_state = create_test_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(card_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/card")
            .set_json(json!({"content": "no title"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        assert!(logged("title is required"));
    }

    #[actix_web::test]
    async fn test_get_unknown_card() {
        capture_logs();
        let app_state = create_test_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(card_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/card/unknown").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = test::read_body(resp).await;
        assert_eq!(body, "Card Not Found");

        assert!(logged("Card with id unknown not found."));
    }

    #[actix_web::test]
    async fn test_delete_card_removes_references() {
        let app_state = create_test_app_state();
        let card_store = app_state.store_context.card_store.clone();
        let list_store = app_state.store_context.list_store.clone();

        let card = Card::new("Task One", "This is card one");
        let other = Card::new("Task Two", "This is card two");
        card_store.add_card(card.clone()).unwrap();
        card_store.add_card(other.clone()).unwrap();
        let list = List::new(
            "List One",
            vec![card.id.clone(), other.id.clone(), card.id.clone()],
        );
        list_store.add_list(list.clone()).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(card_routes()),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/card/{}", card.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/card/{}", card.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let list = list_store.get_list(&list.id).unwrap().unwrap();
        assert_eq!(list.card_ids, vec![other.id.clone()]);
        assert_eq!(card_store.get_cards().unwrap(), vec![other]);
    }

    #[actix_web::test]
    async fn test_delete_unknown_card() {
        let app_state = create_test_app_state();
        let card_store = app_state.store_context.card_store.clone();
        let card = Card::new("Task One", "This is card one");
        card_store.add_card(card.clone()).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(card_routes()),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/card/unknown")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = test::read_body(resp).await;
        assert_eq!(body, "Not found");

        assert_eq!(card_store.get_cards().unwrap(), vec![card]);
    }
}
