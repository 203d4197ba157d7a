use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, CONTENT_TYPE};

use crate::errors::HttpStatusError;

// The four verb operations the composer dispatches to. Implementations
// return the response body text or fail.
pub trait HttpService {
    fn get(&self, url: &str, user: Option<&str>, password: Option<&str>) -> Result<String>;
    fn post(&self, url: &str, body: &str, media_type: &str, user: Option<&str>, password: Option<&str>) -> Result<String>;
    fn put(&self, url: &str, body: &str, media_type: &str, user: Option<&str>, password: Option<&str>) -> Result<String>;
    fn delete(&self, url: &str, user: Option<&str>, password: Option<&str>) -> Result<String>;
}

pub struct HttpClientService {
    client: Client,
}

impl HttpClientService {
    pub fn new() -> HttpClientService {
        return HttpClientService { client: Client::new() };
    }

    pub fn with_client(client: Client) -> HttpClientService {
        return HttpClientService { client };
    }

    fn send(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<(&str, &str)>,
        user: Option<&str>,
        password: Option<&str>,
    ) -> Result<String> {
        let mut request = self.client.request(method, url);

        // auth lives on the request builder, never on the shared client,
        // so credentials cannot carry over into the next call
        if let (Some(user), Some(password)) = (user, password) {
            if !user.is_empty() && !password.is_empty() {
                request = request.basic_auth(user, Some(password));
            }
        }
        if let Some((text, media_type)) = body {
            request = request
                .header(CONTENT_TYPE, HeaderValue::try_from(media_type)?)
                .body(text.to_string());
        }

        let response = request.send()?;
        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(HttpStatusError::new(status, text).into());
        }
        return Ok(text);
    }
}

impl HttpService for HttpClientService {
    fn get(&self, url: &str, user: Option<&str>, password: Option<&str>) -> Result<String> {
        return self.send(reqwest::Method::GET, url, None, user, password);
    }

    fn post(&self, url: &str, body: &str, media_type: &str, user: Option<&str>, password: Option<&str>) -> Result<String> {
        return self.send(reqwest::Method::POST, url, Some((body, media_type)), user, password);
    }

    fn put(&self, url: &str, body: &str, media_type: &str, user: Option<&str>, password: Option<&str>) -> Result<String> {
        return self.send(reqwest::Method::PUT, url, Some((body, media_type)), user, password);
    }

    fn delete(&self, url: &str, user: Option<&str>, password: Option<&str>) -> Result<String> {
        return self.send(reqwest::Method::DELETE, url, None, user, password);
    }
}
