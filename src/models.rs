use serde::{Deserialize, Serialize};

/// A slug and the url it redirects to, as persisted in the store file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Entry {
    pub slug: String,
    /// Omitted from the file when the entry was created without a url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Request body for POST /entry
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateEntryRequest {
    /// Generated as a UUID v4 when absent or empty
    pub slug: Option<String>,
    /// Stored as given, without any format check
    #[serde(default)]
    pub url: Option<String>,
}

impl CreateEntryRequest {
    /// Turn the request into a storable entry, generating a slug if none was given
    pub fn into_entry(self) -> Entry {
        let slug = match self.slug {
            Some(slug) if !slug.is_empty() => slug,
            _ => uuid::Uuid::new_v4().to_string(),
        };

        Entry {
            slug,
            url: self.url,
        }
    }
}
