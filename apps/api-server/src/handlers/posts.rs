//! Post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{Author, PostDraft, PostPatch};
use quill_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
///
/// Returns every live post as its wire projection. The array length always
/// equals the store's current count.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /posts
///
/// Validates presence of every required field before touching the store.
/// The store assigns id and created.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let draft = validate_draft(body.into_inner())?;
    let post = state.posts.insert(draft).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /posts/{id}
///
/// Partial update of title and content; author and created are immutable via
/// this path. A body id, when present, must agree with the path id.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id
        && body_id != id
    {
        return Err(AppError::BadRequest(format!(
            "Request path id ({id}) and request body id ({body_id}) must match"
        )));
    }

    let patch = PostPatch {
        title: req.title,
        content: req.content,
    };
    state.posts.update(id, patch).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
///
/// Idempotent: deleting an id that never existed, or was already removed,
/// still responds 204.
pub async fn remove(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

fn validate_draft(req: CreatePostRequest) -> Result<PostDraft, AppError> {
    let mut missing = Vec::new();

    let title = require(&mut missing, "title", req.title);
    let content = require(&mut missing, "content", req.content);
    let (first_name, last_name) = match req.author {
        Some(author) => (
            require(&mut missing, "author.firstName", author.first_name),
            require(&mut missing, "author.lastName", author.last_name),
        ),
        None => {
            missing.push("missing field `author`".to_string());
            (String::new(), String::new())
        }
    };

    if !missing.is_empty() {
        return Err(AppError::Validation(missing));
    }

    Ok(PostDraft::new(title, content, Author::new(first_name, last_name)))
}

/// Empty and whitespace-only values count as missing; the wire contract
/// requires non-empty fields.
fn require(missing: &mut Vec<String>, name: &str, value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(format!("missing field `{name}`"));
            String::new()
        }
    }
}
