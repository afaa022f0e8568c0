// SPDX-License-Identifier: MPL-2.0
//! Wire format of the photo search endpoint.

use crate::application::port::SearchError;
use crate::domain::search::{Image, ImageId, SearchResults, TotalPages};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchPayload {
    results: Vec<PhotoPayload>,
    total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct PhotoPayload {
    id: String,
    urls: PhotoUrls,
    #[serde(default)]
    alt_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    small: String,
}

impl From<PhotoPayload> for Image {
    fn from(photo: PhotoPayload) -> Self {
        Self {
            id: ImageId::new(photo.id),
            thumbnail_url: photo.urls.small,
            description: photo.alt_description.filter(|d| !d.trim().is_empty()),
        }
    }
}

/// Decodes a search response body.
///
/// A body missing `results` or `total_pages`, or an item missing `id` or
/// `urls.small`, is reported as [`SearchError::Malformed`].
pub(super) fn decode_search_results(body: &[u8]) -> Result<SearchResults, SearchError> {
    let payload: SearchPayload =
        serde_json::from_slice(body).map_err(|e| SearchError::Malformed(e.to_string()))?;

    Ok(SearchResults {
        images: payload.results.into_iter().map(Image::from).collect(),
        total_pages: TotalPages::new(payload.total_pages),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_results_in_order() {
        let body = br#"{
            "total": 2,
            "total_pages": 5,
            "results": [
                {"id": "a1", "urls": {"small": "u1", "regular": "r1"}, "alt_description": "cat"},
                {"id": "b2", "urls": {"small": "u2"}, "alt_description": null}
            ]
        }"#;

        let results = decode_search_results(body).expect("valid payload");

        assert_eq!(results.total_pages.value(), 5);
        assert_eq!(results.images.len(), 2);
        assert_eq!(results.images[0].id.as_str(), "a1");
        assert_eq!(results.images[0].thumbnail_url, "u1");
        assert_eq!(results.images[0].description.as_deref(), Some("cat"));
        assert_eq!(results.images[1].description, None);
    }

    #[test]
    fn absent_description_is_none() {
        let body = br#"{"total_pages": 1, "results": [{"id": "x", "urls": {"small": "s"}}]}"#;
        let results = decode_search_results(body).expect("valid payload");
        assert_eq!(results.images[0].alt_text(), "");
    }

    #[test]
    fn empty_results_are_valid() {
        let body = br#"{"total_pages": 5, "results": []}"#;
        let results = decode_search_results(body).expect("valid payload");
        assert!(results.images.is_empty());
        assert_eq!(results.total_pages.value(), 5);
    }

    #[test]
    fn missing_total_pages_is_malformed() {
        let body = br#"{"results": []}"#;
        assert!(matches!(
            decode_search_results(body),
            Err(SearchError::Malformed(_))
        ));
    }

    #[test]
    fn missing_results_is_malformed() {
        let body = br#"{"total_pages": 3}"#;
        assert!(matches!(
            decode_search_results(body),
            Err(SearchError::Malformed(_))
        ));
    }

    #[test]
    fn item_without_small_url_is_malformed() {
        let body = br#"{"total_pages": 1, "results": [{"id": "x", "urls": {}}]}"#;
        assert!(matches!(
            decode_search_results(body),
            Err(SearchError::Malformed(_))
        ));
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(
            decode_search_results(b"<html>rate limited</html>"),
            Err(SearchError::Malformed(_))
        ));
    }
}
