//! Novel Commands
//!
//! Frontend bindings for novel and chapter endpoints.

use super::Api;
use crate::error::ApiResult;
use crate::models::{Chapter, NovelCreate};
use crate::transport::{join_url, ApiRequest};

impl Api {
    pub async fn create_novel(&self, novel: &NovelCreate) -> ApiResult<()> {
        let body = serde_json::to_value(novel)?;
        self.execute(ApiRequest::post("/novels", Some(body))).await
    }

    pub async fn delete_novel(&self, id: u32) -> ApiResult<()> {
        self.execute(ApiRequest::delete(format!("/novels/{}", id))).await
    }

    /// Ask the backend to write the next chapter of a novel
    pub async fn generate_next_chapter(&self, id: u32) -> ApiResult<()> {
        self.execute(ApiRequest::post(format!("/novels/{}/generate", id), None))
            .await
    }

    /// Generated chapters in order; entries may lack `content`
    pub async fn list_chapters(&self, novel_id: u32) -> ApiResult<Vec<Chapter>> {
        self.fetch(ApiRequest::get(format!("/novels/{}/chapters", novel_id)))
            .await
    }

    /// Full chapter including content
    pub async fn get_chapter(&self, id: u32) -> ApiResult<Chapter> {
        self.fetch(ApiRequest::get(format!("/chapters/{}", id))).await
    }
}

/// Document export URL, opened in a new tab rather than fetched
pub fn export_url(api_base: &str, novel_id: u32) -> String {
    join_url(api_base, &format!("/novels/{}/export-docx", novel_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_url_is_absolute_to_base() {
        assert_eq!(export_url("/api", 7), "/api/novels/7/export-docx");
    }
}
