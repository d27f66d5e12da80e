//! NASA Astronomy Picture of the Day.

use serde::{Deserialize, Serialize};

use crate::upstream::{API_KEY_PARAM, UpstreamRequest};

/// Public subset of the APOD payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstronomyPicture {
    pub date: String,
    pub title: String,
    pub explanation: String,
    pub media_type: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Picture request for a single day.
pub fn apod_request(base_url: &str, date: &str, api_key: &str) -> UpstreamRequest {
    UpstreamRequest::new(base_url)
        .param(API_KEY_PARAM, api_key)
        .param("date", date)
}
