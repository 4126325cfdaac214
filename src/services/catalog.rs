//! Regions and sizes

use super::list_all;
use crate::api::{self, RegionsRoot, SizesRoot};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};

wrapper!(
    /// A region
    Region => api::Region
);
wrapper!(
    /// A server size
    Size => api::Size
);

#[derive(Debug, Clone)]
pub struct RegionsService {
    client: HttpClient,
}

impl RegionsService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Region>> {
        list_all::<RegionsRoot, _>(&self.client, "v2/regions", RequestConfig::new()).await
    }
}

#[derive(Debug, Clone)]
pub struct SizesService {
    client: HttpClient,
}

impl SizesService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Size>> {
        list_all::<SizesRoot, _>(&self.client, "v2/sizes", RequestConfig::new()).await
    }
}
