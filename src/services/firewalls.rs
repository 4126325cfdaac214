//! Firewalls service

use super::list_all;
use crate::api::{self, FirewallsRoot};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};

wrapper!(
    /// A cloud firewall
    Firewall => api::Firewall
);

#[derive(Debug, Clone)]
pub struct FirewallsService {
    client: HttpClient,
}

impl FirewallsService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// All firewalls
    pub async fn list(&self) -> Result<Vec<Firewall>> {
        list_all::<FirewallsRoot, _>(&self.client, "v2/firewalls", RequestConfig::new()).await
    }

    /// Firewalls applied to server `server_id`
    pub async fn list_by_server(&self, server_id: u64) -> Result<Vec<Firewall>> {
        let path = format!("v2/servers/{server_id}/firewalls");
        list_all::<FirewallsRoot, _>(&self.client, &path, RequestConfig::new()).await
    }
}
