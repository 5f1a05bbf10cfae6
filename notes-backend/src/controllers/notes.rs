//! Notes REST API: create, list, fetch and delete notes.
//!
//! Each handler makes exactly one `NoteStore` call and renders the result.

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};

use crate::error::{NotesError, Result};
use crate::models::CreateNoteRequest;
use crate::AppState;

/// Path ids must be plain ASCII digits; `str::parse` alone would also take `+2`.
fn parse_id(raw: &str) -> Result<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NotesError::MalformedId(raw.to_string()));
    }
    raw.parse::<u64>()
        .map_err(|_| NotesError::MalformedId(raw.to_string()))
}

/// GET /api/notes
async fn list_notes(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(data.notes.list())
}

/// POST /api/notes
async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> Result<HttpResponse> {
    let note = data.notes.create(body.content_text())?;
    Ok(HttpResponse::Ok().json(note))
}

/// GET /api/notes/{id}
async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = parse_id(&path)?;
    let note = data.notes.find_by_id(id)?;
    Ok(HttpResponse::Ok().json(note))
}

/// DELETE /api/notes/{id}
async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = parse_id(&path)?;
    data.notes.remove_by_id(id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Render unparseable JSON bodies the same way as other client errors
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(serde_json::json!({
            "error": err.to_string()
        }));
        InternalError::from_response(err, response).into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .app_data(json_config())
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
