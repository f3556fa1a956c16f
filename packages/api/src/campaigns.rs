//! Campaign CRUD, photo upload and the country/city lists that feed the
//! campaign form's cascading selects.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use store::models::StatusUpdate;
use store::{Campaign, CampaignDraft};

use crate::{ApiClient, ApiError, Endpoint};

/// Multipart field name the upload endpoint reads.
pub const PHOTO_FIELD: &str = "photo";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    #[serde(alias = "path", alias = "url", alias = "filePath")]
    photo_path: String,
}

/// Countries and cities come back either as bare strings or as `{name}`
/// objects depending on the backend version.
#[derive(Deserialize)]
#[serde(untagged)]
enum PlaceEntry {
    Name(String),
    Named { name: String },
}

impl PlaceEntry {
    fn into_name(self) -> String {
        match self {
            PlaceEntry::Name(name) | PlaceEntry::Named { name } => name,
        }
    }
}

fn place_names(entries: Vec<PlaceEntry>) -> Vec<String> {
    entries
        .into_iter()
        .map(PlaceEntry::into_name)
        .filter(|name| !name.trim().is_empty())
        .collect()
}

impl ApiClient {
    /// Campaigns owned by the signed-in user.
    pub async fn get_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        let endpoint = Endpoint::MyCampaigns;
        let builder = self.request(&endpoint)?;
        self.send(&endpoint, builder).await
    }

    /// Every campaign on the platform (admin only).
    pub async fn get_all_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        let endpoint = Endpoint::AllCampaigns;
        let builder = self.request(&endpoint)?;
        self.send(&endpoint, builder).await
    }

    pub async fn get_campaign(&self, id: &str) -> Result<Campaign, ApiError> {
        let endpoint = Endpoint::Campaign(id.to_string());
        let builder = self.request(&endpoint)?;
        self.send(&endpoint, builder).await
    }

    pub async fn create_campaign(&self, draft: &CampaignDraft) -> Result<(), ApiError> {
        let endpoint = Endpoint::CreateCampaign;
        let builder = self.request(&endpoint)?.json(draft);
        self.send_unit(&endpoint, builder).await
    }

    pub async fn update_campaign(&self, id: &str, draft: &CampaignDraft) -> Result<(), ApiError> {
        let endpoint = Endpoint::UpdateCampaign(id.to_string());
        let builder = self.request(&endpoint)?.json(draft);
        self.send_unit(&endpoint, builder).await
    }

    /// Owner stop/activate, or an admin review decision with an optional
    /// message for the owner.
    pub async fn set_campaign_status(&self, id: &str, update: &StatusUpdate) -> Result<(), ApiError> {
        let endpoint = Endpoint::UpdateCampaign(id.to_string());
        let builder = self.request(&endpoint)?.json(update);
        self.send_unit(&endpoint, builder).await
    }

    pub async fn delete_campaign(&self, id: &str) -> Result<(), ApiError> {
        let endpoint = Endpoint::DeleteCampaign(id.to_string());
        let builder = self.request(&endpoint)?;
        self.send_unit(&endpoint, builder).await
    }

    /// Upload a campaign photo and return the stored path to put in
    /// [`CampaignDraft::photo_path`].
    pub async fn upload_photo(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> Result<String, ApiError> {
        let endpoint = Endpoint::UploadPhoto;
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let builder = self
            .request(&endpoint)?
            .multipart(Form::new().part(PHOTO_FIELD, part));
        let response: UploadResponse = self.send(&endpoint, builder).await?;
        if response.photo_path.trim().is_empty() {
            return Err(ApiError::Decode("upload returned no path".to_string()));
        }
        Ok(response.photo_path)
    }

    pub async fn get_countries(&self) -> Result<Vec<String>, ApiError> {
        let endpoint = Endpoint::Countries;
        let builder = self.request(&endpoint)?;
        let entries: Vec<PlaceEntry> = self.send(&endpoint, builder).await?;
        Ok(place_names(entries))
    }

    pub async fn get_cities(&self, country: &str) -> Result<Vec<String>, ApiError> {
        let endpoint = Endpoint::Cities(country.to_string());
        let builder = self.request(&endpoint)?;
        let entries: Vec<PlaceEntry> = self.send(&endpoint, builder).await?;
        Ok(place_names(entries))
    }
}

/// Best-effort MIME type from a file name, for uploads where the browser
/// did not tell us.
pub fn guess_image_mime(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::decode_body;

    #[test]
    fn test_place_entries_in_both_shapes() {
        let entries: Vec<PlaceEntry> =
            decode_body(r#"["Morocco", {"name": "France"}, {"name": " "}]"#).unwrap();
        assert_eq!(place_names(entries), vec!["Morocco", "France"]);

        let entries: Vec<PlaceEntry> = decode_body(r#"{"data": ["Rabat"]}"#).unwrap();
        assert_eq!(place_names(entries), vec!["Rabat"]);
    }

    #[test]
    fn test_upload_response_aliases() {
        let a: UploadResponse = decode_body(r#"{"photoPath": "uploads/a.png"}"#).unwrap();
        let b: UploadResponse = decode_body(r#"{"path": "uploads/a.png"}"#).unwrap();
        assert_eq!(a.photo_path, b.photo_path);
    }

    #[test]
    fn test_guess_image_mime() {
        assert_eq!(guess_image_mime("banner.PNG"), "image/png");
        assert_eq!(guess_image_mime("photo.jpeg"), "image/jpeg");
        assert_eq!(guess_image_mime("noext"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_campaign_calls_need_token() {
        let api = ApiClient::new("http://localhost:5000/api");
        assert_eq!(api.get_campaigns().await.unwrap_err(), ApiError::MissingToken);
        assert_eq!(
            api.upload_photo("a.png", vec![1, 2, 3], "image/png").await.unwrap_err(),
            ApiError::MissingToken
        );
    }
}
