use crate::api::server::AppState;
use crate::error::{AddListError, ApiError};
use actix_web::{
    http::header::LOCATION,
    web::{self, delete, get, post, Data},
    HttpResponse, Scope,
};
use log::{error, info};
use shared::models::list::{CreatedList, List, ListRequest};

async fn get_lists(app_state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let lists = app_state.store_context.list_store.get_lists()?;
    Ok(HttpResponse::Ok().json(lists))
}

async fn get_list(
    id: web::Path<String>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    match app_state.store_context.list_store.get_list(&id)? {
        Some(list) => Ok(HttpResponse::Ok().json(list)),
        None => {
            error!("Cannot find list of {id}");
            Err(ApiError::NotFound("List not found"))
        }
    }
}

async fn create_list(
    list: web::Json<ListRequest>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let new_list = list.into_inner().validate().map_err(|e| {
        error!("{e}");
        ApiError::InvalidData
    })?;

    let list = List::from(new_list);
    let id = list.id.clone();
    match app_state.store_context.list_store.add_list(list) {
        Ok(()) => {}
        Err(AddListError::UnknownCards(card_ids)) => {
            for card_id in card_ids {
                error!("Card with id {card_id} not found in cards array.");
            }
            return Err(ApiError::InvalidData);
        }
        Err(AddListError::Store(e)) => return Err(e.into()),
    }
    info!("List with id {id} created");

    Ok(HttpResponse::Created()
        .insert_header((LOCATION, app_state.location_for("list", &id)))
        .json(CreatedList { id }))
}

async fn delete_list(
    id: web::Path<String>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let list_store = &app_state.store_context.list_store;
    if list_store.delete_list(&id)?.is_none() {
        error!("List with {id} not found");
        return Err(ApiError::NotFound("Not found"));
    }

    info!("List with id {id} deleted");
    Ok(HttpResponse::NoContent().finish())
}

pub(crate) fn list_routes() -> Scope {
    web::scope("/list")
        .route("", get().to(get_lists))
        .route("", post().to(create_list))
        .route("/{id}", get().to(get_list))
        .route("/{id}", delete().to(delete_list))
}
