//! Tags service

use super::list_all;
use crate::api::{self, TagsRoot};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};

wrapper!(
    /// A tag
    Tag => api::Tag
);

impl Tag {
    /// Number of servers carrying this tag
    pub fn server_count(&self) -> u64 {
        self.resources
            .as_ref()
            .and_then(|r| r.servers.as_ref())
            .map_or(0, |s| s.count)
    }
}

#[derive(Debug, Clone)]
pub struct TagsService {
    client: HttpClient,
}

impl TagsService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Tag>> {
        list_all::<TagsRoot, _>(&self.client, "v2/tags", RequestConfig::new()).await
    }
}
