//! Delivery of analytics events to the collection service

use memegen_core::prelude::*;
use reqwest::header::CONTENT_TYPE;
use serde_json::json;
use url::Url;

use super::AnalyticsEvent;

/// Where the tag loader sends events
#[trait_variant::make(TagTransport: Send)]
pub trait LocalTagTransport {
    async fn send_event(
        &self,
        measurement_id: &str,
        client_id: &str,
        event: &AnalyticsEvent,
    ) -> Result<()>;
}

/// GA4 Measurement Protocol transport
#[derive(Debug, Clone)]
pub struct MeasurementProtocol {
    client: reqwest::Client,
    endpoint: String,
    api_secret: Option<String>,
}

impl MeasurementProtocol {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>, api_secret: &str) -> Self {
        let api_secret = Some(api_secret.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            client,
            endpoint: endpoint.into(),
            api_secret,
        }
    }

    /// Collection URL for one measurement ID, or `None` without a secret
    pub fn collect_url(&self, measurement_id: &str) -> Result<Option<Url>> {
        let Some(ref secret) = self.api_secret else {
            return Ok(None);
        };
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| Error::config_invalid(format!("analytics endpoint: {e}")))?;
        url.query_pairs_mut()
            .append_pair("measurement_id", measurement_id)
            .append_pair("api_secret", secret);
        Ok(Some(url))
    }
}

/// Request body for one event
pub fn collect_payload(client_id: &str, event: &AnalyticsEvent) -> serde_json::Value {
    let mut params = json!({ "event_category": event.category });
    if let Some(ref label) = event.label {
        params["event_label"] = json!(label);
    }
    if let Some(value) = event.value {
        params["value"] = json!(value);
    }
    json!({
        "client_id": client_id,
        "events": [{ "name": event.action, "params": params }],
    })
}

impl TagTransport for MeasurementProtocol {
    async fn send_event(
        &self,
        measurement_id: &str,
        client_id: &str,
        event: &AnalyticsEvent,
    ) -> Result<()> {
        let Some(url) = self.collect_url(measurement_id)? else {
            trace!("No analytics api_secret, not sending {}", event.action);
            return Ok(());
        };

        let body = serde_json::to_vec(&collect_payload(client_id, event))?;
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::http(format!(
                "collection endpoint returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_url_requires_secret() {
        let transport = MeasurementProtocol::new(
            reqwest::Client::new(),
            "https://collect.example.com/mp/collect",
            "  ",
        );
        assert_eq!(transport.collect_url("G-1").unwrap(), None);
    }

    #[test]
    fn test_collect_url_has_id_and_secret() {
        let transport = MeasurementProtocol::new(
            reqwest::Client::new(),
            "https://collect.example.com/mp/collect",
            "s3cret",
        );
        let url = transport.collect_url("G-ABC").unwrap().unwrap();
        assert_eq!(
            url.as_str(),
            "https://collect.example.com/mp/collect?measurement_id=G-ABC&api_secret=s3cret"
        );
    }

    #[test]
    fn test_collect_url_invalid_endpoint() {
        let transport = MeasurementProtocol::new(reqwest::Client::new(), "not a url", "s");
        assert!(transport.collect_url("G-1").is_err());
    }

    #[test]
    fn test_payload_shape() {
        let event = AnalyticsEvent::new("generate_success", Some("memes_generated"), Some(2));
        let payload = collect_payload("123.456", &event);

        assert_eq!(payload["client_id"], "123.456");
        let first = &payload["events"][0];
        assert_eq!(first["name"], "generate_success");
        assert_eq!(first["params"]["event_category"], "MemeGen");
        assert_eq!(first["params"]["event_label"], "memes_generated");
        assert_eq!(first["params"]["value"], 2);
    }

    #[test]
    fn test_payload_omits_missing_label_and_value() {
        let event = AnalyticsEvent::new("toggle_theme", None, None);
        let payload = collect_payload("c", &event);
        let params = &payload["events"][0]["params"];
        assert!(params.get("event_label").is_none());
        assert!(params.get("value").is_none());
    }
}
