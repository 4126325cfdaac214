//! Actions service

use super::list_all;
use crate::api::{self, ActionsRoot};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};

wrapper!(
    /// An action
    Action => api::Action
);

impl Action {
    /// Whether the action has finished, successfully or not
    pub fn is_finished(&self) -> bool {
        matches!(self.status.as_str(), "completed" | "errored")
    }
}

#[derive(Debug, Clone)]
pub struct ActionsService {
    client: HttpClient,
}

impl ActionsService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Every action on the account
    pub async fn list(&self) -> Result<Vec<Action>> {
        list_all::<ActionsRoot, _>(&self.client, "v2/actions", RequestConfig::new()).await
    }
}
