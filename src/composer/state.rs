use serde::Serialize;

use super::action::ComposerAction;
use super::types::{parse_timeout, Header, HeaderField, ProxySettings, RequestConfig};
use crate::dispatch::Exchange;

/// Everything the form shows: the request being edited, the proxy toggle, the
/// loading flag and the last exchange.
///
/// State only changes through [`Composer::apply`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct Composer {
    pub request: RequestConfig,
    pub proxy: ProxySettings,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_exchange: Option<Exchange>,
}

impl Composer {
    pub fn new(request: RequestConfig, proxy: ProxySettings) -> Self {
        Self {
            request,
            proxy,
            loading: false,
            last_exchange: None,
        }
    }

    /// A send is allowed when nothing is in flight and a URL is set.
    pub fn can_send(&self) -> bool {
        !self.loading && !self.request.url.is_empty()
    }

    /// Applies a single action.
    pub fn apply(&mut self, action: ComposerAction) {
        match action {
            ComposerAction::SetMethod { method } => self.request.method = method,
            ComposerAction::SetUrl { url } => self.request.url = url,
            ComposerAction::AddHeader => self.request.headers.push(Header::default()),
            ComposerAction::RemoveHeader { index } => {
                if index < self.request.headers.len() {
                    self.request.headers.remove(index);
                }
            }
            ComposerAction::UpdateHeader {
                index,
                field,
                value,
            } => {
                if let Some(header) = self.request.headers.get_mut(index) {
                    match field {
                        HeaderField::Key => header.key = value,
                        HeaderField::Value => header.value = value,
                    }
                }
            }
            ComposerAction::SetBody { body } => self.request.body = body,
            ComposerAction::SetTimeout { value } => self.request.timeout = parse_timeout(&value),
            ComposerAction::SetProxyEnabled { enabled } => self.proxy.enabled = enabled,
            ComposerAction::SetProxyUrl { url } => self.proxy.url = url,
            ComposerAction::SendStarted => self.loading = true,
            ComposerAction::SendFinished { exchange } => {
                self.loading = false;
                self.last_exchange = Some(*exchange);
            }
            ComposerAction::SendCancelled => self.loading = false,
        }
    }
}
