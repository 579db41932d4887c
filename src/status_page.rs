//! Maintenance page rendering.
//!
//! Every request parameter `K` whose `CONFIG_K` flag exists produces one
//! notice: "not started" when the flag equals the parameter value, otherwise
//! "not enabled". Parameters without a flag are ignored.

use crate::flags::ConfigFlags;
use crate::params::RequestParams;
use crate::views::layout::{template_env, MAINTENANCE_TEMPLATE};
use minijinja::context;
use serde::Serialize;

/// Seconds between client-side reloads of the page.
pub const REFRESH_SECONDS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceState {
    /// Flag matches the requested value: the service is expected but down.
    NotStarted,
    NotEnabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceNotice {
    pub service: String,
    pub state: ServiceState,
}

impl ServiceNotice {
    pub fn heading(&self) -> String {
        match self.state {
            ServiceState::NotStarted => format!("OMD: {} not started", self.service),
            ServiceState::NotEnabled => format!("OMD: {} not enabled", self.service),
        }
    }

    pub fn message(&self) -> String {
        match self.state {
            ServiceState::NotStarted => {
                format!("Service '{}' is currently undergoing maintenance.", self.service)
            }
            ServiceState::NotEnabled => format!("Service '{}' is disabled.", self.service),
        }
    }
}

pub fn evaluate(params: &RequestParams, flags: &ConfigFlags) -> Vec<ServiceNotice> {
    params
        .iter()
        .filter_map(|(service, value)| {
            let expected = flags.lookup(service)?;
            let state = if expected == value {
                ServiceState::NotStarted
            } else {
                ServiceState::NotEnabled
            };
            Some(ServiceNotice {
                service: service.to_string(),
                state,
            })
        })
        .collect()
}

pub fn render(params: &RequestParams, flags: &ConfigFlags) -> Result<String, String> {
    render_notices(&evaluate(params, flags))
}

pub fn render_notices(notices: &[ServiceNotice]) -> Result<String, String> {
    let context = context! {
        refresh_seconds => REFRESH_SECONDS,
        notices => notices,
    };

    template_env()?
        .get_template(MAINTENANCE_TEMPLATE)
        .and_then(|template| template.render(context))
        .map_err(|err| format!("failed to render maintenance page: {err}"))
}
