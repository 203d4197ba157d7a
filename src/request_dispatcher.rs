use anyhow::Result;

use crate::http_service::HttpService;
use crate::request_command::{Method, RequestCommand};

impl RequestCommand {
    // The only operation that touches the network. Routes on the verb; an
    // unknown verb is reported inline instead of failing the call.
    pub fn dispatch(&self, service: &dyn HttpService) -> Result<String> {
        let user = self.user.as_deref();
        let password = self.password.as_deref();
        return match &self.method {
            Method::Get => service.get(&self.request_url, user, password),
            Method::Post => service.post(&self.request_url, &self.body_text, &self.media_type, user, password),
            Method::Put => service.put(&self.request_url, &self.body_text, &self.media_type, user, password),
            Method::Delete => service.delete(&self.request_url, user, password),
            Method::Unsupported(token) => Ok(format!("unsupported method: {}", token)),
        };
    }
}
