use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use utoipa::ToSchema;

use crate::{
    errors::{AppError, Result},
    handlers::AppState,
    middleware::auth::AdminUser,
    models::Game,
    services::uploads::{self, UploadForm, UploadedFile},
    utils::file,
};

async fn read_text(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read {}: {}", name, e)))
}

/// Reads the whole multipart body. `None` files are the empty parts browsers
/// send for a file input with nothing chosen.
async fn read_file(field: axum::extract::multipart::Field<'_>) -> Result<Option<UploadedFile>> {
    let file_name = field.file_name().unwrap_or("").to_string();
    let declared = field.content_type().map(str::to_string);

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read file data: {}", e)))?;

    if file_name.is_empty() && data.is_empty() {
        return Ok(None);
    }

    Ok(Some(UploadedFile {
        content_type: file::resolve_content_type(declared.as_deref(), &file_name),
        file_name,
        data: data.to_vec(),
    }))
}

pub async fn parse_upload_form(mut multipart: Multipart) -> Result<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::Validation(format!("Failed to parse multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "title" => form.title = read_text(field, "title").await?,
            "description" => form.description = read_text(field, "description").await?,
            "min_requirements" => {
                form.min_requirements = read_text(field, "min_requirements").await?
            }
            "recommended_requirements" => {
                form.recommended_requirements =
                    read_text(field, "recommended_requirements").await?
            }
            "download_link" => form.download_link = read_text(field, "download_link").await?,
            "banner" => {
                if let Some(banner) = read_file(field).await? {
                    if form.banner.is_some() {
                        return Err(AppError::Validation(
                            "Only one banner image may be uploaded".to_string(),
                        ));
                    }
                    form.banner = Some(banner);
                }
            }
            "screenshots" | "screenshots[]" => {
                if let Some(screenshot) = read_file(field).await? {
                    form.screenshots.push(screenshot);
                }
            }
            _ => {} // Ignore unknown fields
        }
    }

    Ok(form)
}

/// The multipart fields `upload_game` reads, as documented in OpenAPI.
#[derive(ToSchema)]
pub struct UploadGameForm {
    pub title: String,
    pub description: String,
    pub download_link: String,
    pub min_requirements: Option<String>,
    pub recommended_requirements: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub banner: Option<Vec<u8>>,
    /// Sent as repeated `screenshots` (or `screenshots[]`) file parts.
    #[schema(value_type = Vec<String>)]
    pub screenshots: Vec<Vec<u8>>,
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/games",
    request_body(content = UploadGameForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Game created", body = Game),
        (status = 400, description = "Missing required fields or invalid files"),
        (status = 303, description = "Not signed in or not an admin; redirect to the login page"),
        (status = 500, description = "An upload or the insert failed")
    ),
    security(("bearer" = [])),
    tag = "admin"
)]
pub async fn upload_game(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Game>)> {
    let form = parse_upload_form(multipart).await?;

    tracing::info!(
        "Admin {} uploading {:?} with {} screenshot(s)",
        user.id,
        form.title,
        form.screenshots.len()
    );

    let result = uploads::create_game(
        state.store.as_ref(),
        state.storage.as_ref(),
        &form,
        Utc::now().timestamp_millis(),
    )
    .await;

    match result {
        Ok(game) => {
            state.metrics.record_upload();
            Ok((StatusCode::CREATED, Json(game)))
        }
        Err(e) => {
            if !matches!(e, AppError::Validation(_)) {
                state.metrics.record_upload_failure();
            }
            Err(e)
        }
    }
}
