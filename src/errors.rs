use std::fmt::{Debug, Display, Formatter};

use reqwest::StatusCode;

// Non-success response from the server, carried together with its body so
// the caller can show both.
pub struct HttpStatusError {
    pub status: StatusCode,
    pub body: String,
}

impl HttpStatusError {
    pub fn new(status: StatusCode, body: String) -> HttpStatusError {
        return HttpStatusError { status, body };
    }
}

impl Display for HttpStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.body.is_empty() {
            return write!(f, "http status {}", self.status);
        }
        write!(f, "http status {}: {}", self.status, self.body)
    }
}

impl Debug for HttpStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::error::Error for HttpStatusError {}
