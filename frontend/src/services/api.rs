use gloo::net::http::{Request, Response};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use shared::modal::SubmitRequest;
use shared::screens::capital_flow::FlowQuery;
use shared::screens::reminder::ReminderQuery;
use shared::{ApiError, ApiResponse, CapitalFlowPage, CapitalFlowType, ReminderPage, UserInfo};

/// REST collections that support create, update and delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    CapitalFlow,
    FlowType,
    Reminder,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::CapitalFlow => "/api/capitalFlow",
            Resource::FlowType => "/api/capitalFlowType",
            Resource::Reminder => "/api/reminder",
        }
    }
}

/// API client for communicating with the backend server
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    /// One page of flow records plus the totals of the whole filter
    pub async fn get_capital_flows(&self, query: &FlowQuery) -> Result<CapitalFlowPage, ApiError> {
        let url = self.url(Resource::CapitalFlow.path(), &query.to_pairs());
        self.fetch(Request::get(&url).send().await).await
    }

    /// Every flow type of the account, in backend order
    pub async fn get_flow_types(&self) -> Result<Vec<CapitalFlowType>, ApiError> {
        let url = self.url(Resource::FlowType.path(), &[]);
        self.fetch(Request::get(&url).send().await).await
    }

    pub async fn get_reminders(&self, query: &ReminderQuery) -> Result<ReminderPage, ApiError> {
        let url = self.url(Resource::Reminder.path(), &query.to_pairs());
        self.fetch(Request::get(&url).send().await).await
    }

    pub async fn get_user_info(&self) -> Result<UserInfo, ApiError> {
        let url = self.url("/api/user/info", &[]);
        self.fetch(Request::get(&url).send().await).await
    }

    /// POST for a new record, PUT to `/{id}` for an existing one
    pub async fn save<P: Serialize>(&self, resource: Resource, request: &SubmitRequest<P>) -> Result<(), ApiError> {
        let builder = match request {
            SubmitRequest::Create(_) => Request::post(&self.url(resource.path(), &[])),
            SubmitRequest::Update { id, .. } => Request::put(&self.url(&format!("{}/{}", resource.path(), id), &[])),
        };
        let request = builder
            .json(request.payload())
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
        self.acknowledge(request.send().await).await
    }

    /// Delete one or more records; ids travel comma-joined in the path
    pub async fn delete(&self, resource: Resource, ids: &[i64]) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/{}", resource.path(), join_ids(ids)), &[]);
        self.acknowledge(Request::delete(&url).send().await).await
    }

    fn url(&self, path: &str, params: &[(String, String)]) -> String {
        build_url(&self.base_url, path, params)
    }

    async fn fetch<T: DeserializeOwned>(&self, sent: Result<Response, gloo::net::Error>) -> Result<T, ApiError> {
        read_envelope::<T>(sent).await?.into_data()
    }

    async fn acknowledge(&self, sent: Result<Response, gloo::net::Error>) -> Result<(), ApiError> {
        read_envelope::<IgnoredAny>(sent).await?.into_ack()
    }
}

async fn read_envelope<T: DeserializeOwned>(
    sent: Result<Response, gloo::net::Error>,
) -> Result<ApiResponse<T>, ApiError> {
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ApiError::Http { status, body });
    }
    response.json::<ApiResponse<T>>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

pub fn join_ids(ids: &[i64]) -> String {
    ids.iter().map(i64::to_string).collect::<Vec<_>>().join(",")
}

/// `base + path`, followed by the URI-encoded query string if any
pub fn build_url(base_url: &str, path: &str, params: &[(String, String)]) -> String {
    let mut url = format!("{}/{}", base_url, path.trim_start_matches('/'));
    let query = params
        .iter()
        .map(|(name, value)| {
            let name = String::from(js_sys::encode_uri_component(name));
            let value = String::from(js_sys::encode_uri_component(value));
            format!("{}={}", name, value)
        })
        .collect::<Vec<_>>()
        .join("&");
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url
}
