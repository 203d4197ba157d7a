use std::fmt::{Display, Formatter};

// Closed verb set for dispatch. Unknown tokens are carried through
// normalized so dispatch can report them instead of crashing.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Unsupported(String),
}

impl Method {
    pub fn parse(token: &str) -> Method {
        let normalized = token.trim().to_uppercase();
        return match normalized.as_str() {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            _ => Method::Unsupported(normalized),
        };
    }

    pub fn as_str(&self) -> &str {
        return match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Unsupported(token) => token.as_str(),
        };
    }
}

impl Default for Method {
    fn default() -> Method {
        return Method::Get;
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Parsed "METHOD;PATH;MEDIA_TYPE;BODY" detail spec
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RequestDetail {
    pub method: Method,
    pub path: String,
    pub media_type: String,
    pub body_text: String,
}

impl Default for RequestDetail {
    fn default() -> RequestDetail {
        return RequestDetail {
            method: Method::Get,
            path: String::new(),
            media_type: "text/plain".to_string(),
            body_text: String::new(),
        };
    }
}

// Parsed "BASE_URL;USER;PASSWORD" endpoint spec
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct EndpointSpec {
    pub base_url: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

// A fully composed request, rebuilt from scratch on every composition
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RequestCommand {
    pub method: Method,
    pub path: String,
    pub media_type: String,
    pub body_text: String,
    pub request_url: String,
    pub user: Option<String>,
    pub password: Option<String>,
}
