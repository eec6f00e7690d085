//! Export wire types and the `/save-images` request.
//!
//! ERROR HANDLING
//! ==============
//! The request helper maps both transport failures and body-parse failures
//! to an error string for the host to report. Application-level failures
//! arrive as a parsed [`SaveImagesResponse`] with `success == false`, even
//! on non-2xx statuses — the server puts the diagnostic in the body.

#[cfg(test)]
#[path = "net_test.rs"]
mod net_test;

use serde::{Deserialize, Serialize};

/// The four serialized surfaces, keyed by export name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportImages {
    pub landscape_agency: String,
    pub landscape_endcard: String,
    pub portrait_agency: String,
    pub portrait_endcard: String,
}

impl ExportImages {
    /// Export-key/data-URL pairs in canonical surface order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("landscape_agency", self.landscape_agency.as_str()),
            ("landscape_endcard", self.landscape_endcard.as_str()),
            ("portrait_agency", self.portrait_agency.as_str()),
            ("portrait_endcard", self.portrait_endcard.as_str()),
        ]
    }
}

/// Body of `POST /save-images`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveImagesRequest {
    pub agency_id: String,
    pub images: ExportImages,
}

/// Server response envelope for `POST /save-images`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveImagesResponse {
    /// Absent in error bodies; treated as failure.
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

/// Submit the export request and parse the response envelope.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent or the response
/// body is not a valid envelope.
#[cfg(target_arch = "wasm32")]
pub async fn save_images(request: &SaveImagesRequest) -> Result<SaveImagesResponse, String> {
    let response = gloo_net::http::Request::post("/save-images")
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    response
        .json::<SaveImagesResponse>()
        .await
        .map_err(|e| e.to_string())
}
