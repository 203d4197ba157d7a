use std::path::Path;

use anyhow::{anyhow, Result};
use chrono::Local;

use crate::command_composer::compose_request;
use crate::http_service::{HttpClientService, HttpService};
use crate::preferences::{UserPreferences, PREFERENCES_FILE};
use crate::settings::{select, Settings};

fn timestamp() -> String {
    return Local::now().format("%H:%M:%S%.3f").to_string();
}

pub fn send_request(url: &str, detail: Option<&str>) -> Result<()> {
    let service = HttpClientService::new();
    return send_with_service(url, detail, &service);
}

pub fn send_with_service(url: &str, detail: Option<&str>, service: &dyn HttpService) -> Result<()> {
    let request = compose_request(url, detail);
    println!("{} {} {}", timestamp(), url, detail.unwrap_or(""));
    println!("({} {} {})", timestamp(), request.request_url, request.method);
    if !request.body_text.is_empty() {
        println!("{} {}", timestamp(), request.body_text);
    }

    if request.request_url.is_empty() {
        println!("{} nothing to send, the base url is empty", timestamp());
        return Ok(());
    }

    // transport failures are shown as the result line, like any response
    let result = match request.dispatch(service) {
        Ok(text) => text,
        Err(reason) => format!("error: {}", reason),
    };
    println!("{} {}", timestamp(), result);
    return Ok(());
}

pub fn preview_request(url: &str, detail: Option<&str>) -> Result<()> {
    let request = compose_request(url, detail);
    println!("{} {}", request.method, request.request_url);
    return Ok(());
}

pub fn run_from_settings(
    settings_file: &Path,
    url_name: Option<&str>,
    type_name: Option<&str>,
    detail_name: Option<&str>,
    save_selection: bool,
) -> Result<()> {
    let settings = Settings::load(settings_file)?;
    let mut prefs = UserPreferences::load(Path::new(PREFERENCES_FILE));

    let url_item = select(&settings.urls, url_name, prefs.selected_url.as_deref())?
        .ok_or_else(|| anyhow!("no urls configured in {}", settings_file.display()))?;
    let type_item = select(&settings.types, type_name, prefs.selected_type.as_deref())?
        .ok_or_else(|| anyhow!("no types configured in {}", settings_file.display()))?;
    // a type without details still sends, with every field defaulted
    let details = settings.details_for_type(&type_item.value);
    let detail_item = select(details, detail_name, prefs.selected_detail.as_deref())?;

    prefs.selected_url = Some(url_item.value.clone());
    prefs.selected_type = Some(type_item.value.clone());
    prefs.selected_detail = detail_item.map(|item| item.value.clone());
    if save_selection {
        prefs.save(Path::new(PREFERENCES_FILE));
    }

    return send_request(&url_item.value, detail_item.map(|item| item.value.as_str()));
}

pub fn list_settings(settings_file: &Path) -> Result<()> {
    let settings = Settings::load(settings_file)?;
    println!("urls:");
    for item in &settings.urls {
        println!("  {} ({})", item.value, item.display_name);
    }
    for type_item in &settings.types {
        println!("details for {} ({}):", type_item.value, type_item.display_name);
        for item in settings.details_for_type(&type_item.value) {
            println!("  {} ({})", item.value, item.display_name);
        }
    }
    return Ok(());
}
