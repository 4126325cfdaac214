//! Servers service

use super::{list_all, Action};
use crate::api::{self, ActionsRoot, BackupsRoot, KernelsRoot, ServersRoot, SnapshotsRoot};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};

const SERVERS_PATH: &str = "v2/servers";

wrapper!(
    /// A server
    Server => api::Server
);
wrapper!(
    /// A kernel a server can boot
    Kernel => api::Kernel
);
wrapper!(
    /// A snapshot or backup image
    Image => api::Image
);

/// Lists servers and their per-server collections
#[derive(Debug, Clone)]
pub struct ServersService {
    client: HttpClient,
}

impl ServersService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// All servers on the account
    pub async fn list(&self) -> Result<Vec<Server>> {
        list_all::<ServersRoot, _>(&self.client, SERVERS_PATH, RequestConfig::new()).await
    }

    /// Servers carrying `tag`
    pub async fn list_by_tag(&self, tag: &str) -> Result<Vec<Server>> {
        let request = RequestConfig::new().query("tag_name", tag);
        list_all::<ServersRoot, _>(&self.client, SERVERS_PATH, request).await
    }

    /// Kernels available to server `id`
    pub async fn kernels(&self, id: u64) -> Result<Vec<Kernel>> {
        let path = format!("{SERVERS_PATH}/{id}/kernels");
        list_all::<KernelsRoot, _>(&self.client, &path, RequestConfig::new()).await
    }

    /// Snapshots of server `id`
    pub async fn snapshots(&self, id: u64) -> Result<Vec<Image>> {
        let path = format!("{SERVERS_PATH}/{id}/snapshots");
        list_all::<SnapshotsRoot, _>(&self.client, &path, RequestConfig::new()).await
    }

    /// Backups of server `id`
    pub async fn backups(&self, id: u64) -> Result<Vec<Image>> {
        let path = format!("{SERVERS_PATH}/{id}/backups");
        list_all::<BackupsRoot, _>(&self.client, &path, RequestConfig::new()).await
    }

    /// Actions performed on server `id`
    pub async fn actions(&self, id: u64) -> Result<Vec<Action>> {
        let path = format!("{SERVERS_PATH}/{id}/actions");
        list_all::<ActionsRoot, _>(&self.client, &path, RequestConfig::new()).await
    }
}
