use serde::Deserialize;

use super::types::{HeaderField, HttpMethod};
use crate::dispatch::Exchange;

/// Every way the composer state can change.
///
/// Edits arrive from the page as JSON tagged by `type`. The send lifecycle
/// variants are raised by the server only and never deserialized.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComposerAction {
    SetMethod {
        method: HttpMethod,
    },
    SetUrl {
        url: String,
    },
    AddHeader,
    RemoveHeader {
        index: usize,
    },
    UpdateHeader {
        index: usize,
        field: HeaderField,
        value: String,
    },
    SetBody {
        body: String,
    },
    /// Raw text from the timeout input
    SetTimeout {
        value: String,
    },
    SetProxyEnabled {
        enabled: bool,
    },
    SetProxyUrl {
        url: String,
    },
    #[serde(skip_deserializing)]
    SendStarted,
    #[serde(skip_deserializing)]
    SendFinished {
        exchange: Box<Exchange>,
    },
    /// The send was dropped before an outcome arrived
    #[serde(skip_deserializing)]
    SendCancelled,
}

impl ComposerAction {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ComposerAction::SetMethod { .. } => "set_method",
            ComposerAction::SetUrl { .. } => "set_url",
            ComposerAction::AddHeader => "add_header",
            ComposerAction::RemoveHeader { .. } => "remove_header",
            ComposerAction::UpdateHeader { .. } => "update_header",
            ComposerAction::SetBody { .. } => "set_body",
            ComposerAction::SetTimeout { .. } => "set_timeout",
            ComposerAction::SetProxyEnabled { .. } => "set_proxy_enabled",
            ComposerAction::SetProxyUrl { .. } => "set_proxy_url",
            ComposerAction::SendStarted => "send_started",
            ComposerAction::SendFinished { .. } => "send_finished",
            ComposerAction::SendCancelled => "send_cancelled",
        }
    }
}
