use std::fs;

use crate::request_command::{EndpointSpec, Method, RequestCommand, RequestDetail};

fn parse_body_segment(segment: &str) -> String {
    let body = segment.trim();
    return match body.strip_prefix('@') {
        // a missing or unreadable body file resolves to an empty body, not an error
        Some(file_name) => fs::read_to_string(file_name).unwrap_or_default(),
        None => body.to_string(),
    };
}

// Decodes "METHOD;PATH;MEDIA_TYPE;BODY", tolerating missing trailing segments.
// Blank segments keep their defaults. Never fails.
pub fn parse_detail(detail: Option<&str>) -> RequestDetail {
    let mut parsed = RequestDetail::default();
    let detail = match detail {
        Some(detail) if !detail.is_empty() => detail,
        _ => return parsed,
    };

    // only the first three ';' split; the rest belongs to the body segment
    let segments: Vec<&str> = detail.splitn(4, ';').collect();
    if let Some(method) = segments.first() {
        if !method.trim().is_empty() {
            parsed.method = Method::parse(method);
        }
    }
    if let Some(path) = segments.get(1) {
        if !path.trim().is_empty() {
            parsed.path = path.trim().to_string();
        }
    }
    if let Some(media_type) = segments.get(2) {
        if !media_type.trim().is_empty() {
            parsed.media_type = media_type.trim().to_string();
        }
    }
    if let Some(body) = segments.get(3) {
        parsed.body_text = parse_body_segment(body);
    }
    return parsed;
}

// Decodes "BASE_URL;USER;PASSWORD". The base url is not validated here,
// that is left to the transport.
pub fn parse_endpoint(url: &str) -> EndpointSpec {
    let mut parsed = EndpointSpec::default();
    if url.is_empty() {
        return parsed;
    }

    let mut segments = url.split(';');
    if let Some(base_url) = segments.next() {
        parsed.base_url = base_url.trim().to_string();
    }
    // presence of the segment sets the field, even to an empty string
    if let Some(user) = segments.next() {
        parsed.user = Some(user.trim().to_string());
    }
    if let Some(password) = segments.next() {
        parsed.password = Some(password.trim().to_string());
    }
    return parsed;
}

pub fn compose_request(url: &str, detail: Option<&str>) -> RequestCommand {
    let detail = parse_detail(detail);
    let endpoint = parse_endpoint(url);

    // an empty base url leaves request_url empty, the marker for "nothing to send"
    let mut request_url = String::new();
    if !endpoint.base_url.is_empty() {
        request_url = endpoint.base_url.clone();
        if !detail.path.is_empty() {
            if !request_url.ends_with('/') {
                request_url.push('/');
            }
            request_url.push_str(detail.path.trim_start_matches('/'));
        }
    }

    return RequestCommand {
        method: detail.method,
        path: detail.path,
        media_type: detail.media_type,
        body_text: detail.body_text,
        request_url,
        user: endpoint.user,
        password: endpoint.password,
    };
}
