//! The dashboard's "Upload Game" flow: validate, push assets to storage, insert the row.

use crate::{
    errors::{AppError, Result},
    models::{Game, NewGame},
    storage::Storage,
    store::CatalogStore,
    utils::file,
};

pub const BANNER_PREFIX: &str = "banners";
pub const SCREENSHOT_PREFIX: &str = "screenshots";

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Everything the upload form submits, before validation.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub title: String,
    pub description: String,
    pub min_requirements: String,
    pub recommended_requirements: String,
    pub download_link: String,
    pub banner: Option<UploadedFile>,
    pub screenshots: Vec<UploadedFile>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl UploadForm {
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("title", &self.title),
            ("description", &self.description),
            ("download_link", &self.download_link),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Please fill in all required fields (missing: {})",
                missing.join(", ")
            )));
        }

        let link = self.download_link.trim();
        let has_host = link
            .strip_prefix("https://")
            .or_else(|| link.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty() && !rest.contains(char::is_whitespace));
        if !has_host {
            return Err(AppError::Validation(
                "Download link must be an http:// or https:// URL".to_string(),
            ));
        }

        for upload in self.banner.iter().chain(self.screenshots.iter()) {
            if !file::is_image(&upload.content_type) {
                return Err(AppError::Validation(format!(
                    "{} is not an image ({})",
                    upload.file_name, upload.content_type
                )));
            }
        }

        Ok(())
    }
}

/// Validates `form`, uploads its files and inserts the game row.
///
/// Objects are named `{millis}_{file}`, starting at `timestamp_millis` for
/// the first file and advancing by one for each following file.
///
/// Nothing touches storage or the store when validation fails. Once uploads
/// start, any failure aborts the rest; objects already written stay in the
/// bucket and are logged.
pub async fn create_game(
    store: &dyn CatalogStore,
    storage: &dyn Storage,
    form: &UploadForm,
    timestamp_millis: i64,
) -> Result<Game> {
    form.validate()?;

    let mut stored: Vec<String> = Vec::new();
    let result = upload_and_insert(store, storage, form, timestamp_millis, &mut stored).await;

    match result {
        Ok(game) => {
            tracing::info!(
                "Created game {} ({:?}) with {} stored objects",
                game.id,
                game.title,
                stored.len()
            );
            Ok(game)
        }
        Err(e) => {
            if !stored.is_empty() {
                tracing::warn!("Upload aborted, leaving orphaned objects: {:?}", stored);
            }
            Err(match e {
                AppError::Validation(_) => e,
                AppError::Storage(msg) => AppError::UploadFailed(msg),
                other => AppError::UploadFailed(other.to_string()),
            })
        }
    }
}

async fn upload_and_insert(
    store: &dyn CatalogStore,
    storage: &dyn Storage,
    form: &UploadForm,
    timestamp_millis: i64,
    stored: &mut Vec<String>,
) -> Result<Game> {
    // One millisecond per object keeps paths distinct within a submission.
    let mut stamp = timestamp_millis;
    let mut next_stamp = || {
        let current = stamp;
        stamp += 1;
        current
    };

    let mut banner_url = None;
    if let Some(banner) = &form.banner {
        let path = file::generate_object_path(BANNER_PREFIX, next_stamp(), &banner.file_name);
        storage.store(&path, &banner.data).await?;
        banner_url = Some(storage.public_url(&path));
        stored.push(path);
    }

    let mut screenshots = Vec::with_capacity(form.screenshots.len());
    for screenshot in &form.screenshots {
        let path = file::generate_object_path(SCREENSHOT_PREFIX, next_stamp(), &screenshot.file_name);
        storage.store(&path, &screenshot.data).await?;
        screenshots.push(storage.public_url(&path));
        stored.push(path);
    }

    let new_game = NewGame {
        title: form.title.trim().to_string(),
        description: form.description.trim().to_string(),
        banner_url,
        screenshots,
        min_requirements: non_empty(&form.min_requirements),
        recommended_requirements: non_empty(&form.recommended_requirements),
        download_link: form.download_link.trim().to_string(),
    };

    store.insert_game(&new_game).await
}
