use super::get;
use crate::Result;
use crate::client::Client;
use crate::response::Response;

#[derive(Clone, Copy, Debug)]
pub struct Opportunities<'client> {
    client: &'client Client,
}

impl<'client> Opportunities<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    pub async fn group(&self, group_id: i64) -> Result<Response> {
        get(self.client, format!("opportunities/groups/{group_id}"), None).await
    }

    pub async fn groups(&self) -> Result<Response> {
        get(self.client, "opportunities/groups".to_owned(), None).await
    }

    pub async fn task(&self, task_id: i64) -> Result<Response> {
        get(self.client, format!("opportunities/tasks/{task_id}"), None).await
    }

    pub async fn tasks(&self) -> Result<Response> {
        get(self.client, "opportunities/tasks".to_owned(), None).await
    }
}
