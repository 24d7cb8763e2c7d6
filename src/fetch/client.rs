use crate::error::{Result, ScrapeoError};
use crate::fetch::config::FetchOptions;
use reqwest::{Client, Response};

/// Fetch `url` and return the response body as text.
///
/// A URL without a scheme (`example.com/page`) cannot be requested as is;
/// when the first attempt fails for that reason it is retried once as
/// `http://example.com/page`, unless [`FetchOptions::retry_without_scheme`]
/// is off. No other retries are made.
pub async fn fetch_html(url: &str, options: &FetchOptions) -> Result<String> {
    let url = url.trim();
    let client = Client::builder()
        .timeout(options.timeout)
        .user_agent(options.user_agent.as_str())
        .build()
        .map_err(|e| fetch_error(url, &e))?;

    log::debug!("GET {}", url);
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) if e.is_builder() && options.retry_without_scheme && !has_scheme(url) => {
            let retry_url = with_http_scheme(url);
            log::debug!("Cannot request {:?} ({}), retrying as {}", url, e, retry_url);
            client
                .get(&retry_url)
                .send()
                .await
                .map_err(|e| fetch_error(&retry_url, &e))?
        }
        Err(e) => return Err(fetch_error(url, &e)),
    };

    read_body(response).await
}

async fn read_body(response: Response) -> Result<String> {
    let url = response.url().to_string();
    let status = response.status();
    log::debug!("{} answered {}", url, status);

    if !status.is_success() {
        return Err(ScrapeoError::HttpStatus { url, status: status.as_u16() });
    }

    response.text().await.map_err(|e| fetch_error(&url, &e))
}

/// Whether the URL names its scheme explicitly
fn has_scheme(url: &str) -> bool {
    url.contains("://")
}

/// Prefix a schema-less URL with `http://`
fn with_http_scheme(url: &str) -> String {
    format!("http://{}", url.trim_start_matches('/'))
}

/// Flatten a reqwest error and its sources into one message
fn fetch_error(url: &str, error: &reqwest::Error) -> ScrapeoError {
    let mut reason = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }

    ScrapeoError::Fetch { url: url.to_string(), reason }
}
