use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::GatewayError;
use crate::models::{AnalyticsSnapshot, DashboardSnapshot, Goal, NewExpense, NewGoal};

/// The backend API. Everything runs on the browser event loop, so futures are not `Send`.
#[async_trait(?Send)]
pub trait Gateway {
    async fn dashboard(&self) -> Result<DashboardSnapshot, GatewayError>;
    async fn create_expense(&self, expense: &NewExpense) -> Result<(), GatewayError>;
    async fn analytics(&self) -> Result<AnalyticsSnapshot, GatewayError>;
    async fn goals(&self) -> Result<Vec<Goal>, GatewayError>;
    async fn create_goal(&self, goal: &NewGoal) -> Result<(), GatewayError>;
}

pub struct HttpGateway {
    config: ApiConfig,
}

impl HttpGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = self.config.endpoint(path);
        let resp = Request::get(&url).send().await?;
        let resp = ensure_ok(resp, path)?;
        resp.json::<T>().await.map_err(|err| GatewayError::Decode {
            path: path.to_string(),
            reason: err.to_string(),
        })
    }

    /// Create calls: the created record in the response body is not used.
    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), GatewayError> {
        let url = self.config.endpoint(path);
        let resp = Request::post(&url).json(body)?.send().await?;
        ensure_ok(resp, path)?;
        Ok(())
    }
}

fn ensure_ok(resp: Response, path: &str) -> Result<Response, GatewayError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(GatewayError::Status {
            path: path.to_string(),
            status: resp.status(),
        })
    }
}

#[async_trait(?Send)]
impl Gateway for HttpGateway {
    async fn dashboard(&self) -> Result<DashboardSnapshot, GatewayError> {
        self.get_json("dashboard").await
    }

    async fn create_expense(&self, expense: &NewExpense) -> Result<(), GatewayError> {
        self.post_json("expenses", expense).await
    }

    async fn analytics(&self) -> Result<AnalyticsSnapshot, GatewayError> {
        self.get_json("analytics").await
    }

    async fn goals(&self) -> Result<Vec<Goal>, GatewayError> {
        self.get_json("goals").await
    }

    async fn create_goal(&self, goal: &NewGoal) -> Result<(), GatewayError> {
        self.post_json("goals", goal).await
    }
}

/// Shared gateway passed from the root component to each page as a prop.
#[derive(Clone)]
pub struct GatewayHandle(pub Rc<dyn Gateway>);

impl GatewayHandle {
    pub fn new<G: Gateway + 'static>(gateway: G) -> Self {
        Self(Rc::new(gateway))
    }

    pub fn http(config: ApiConfig) -> Self {
        Self::new(HttpGateway::new(config))
    }
}

impl PartialEq for GatewayHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for GatewayHandle {
    type Target = dyn Gateway;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
