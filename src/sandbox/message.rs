//! Test WhatsApp message: validation, payload and the HTTP call.

use gloo_net::http::Request;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use super::rate_limit::{RateLimiter, MAX_SENDS_PER_WINDOW};
use crate::config;
use crate::storage::KeyValueStore;

static INDIAN_MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").expect("valid mobile regex"));

pub const DEMO_AMOUNT: &str = "₹2,499.00";
pub const DEMO_PRODUCT: &str = "Annual maintenance contract";
pub const DEMO_BRAND: &str = "Easibill";
const COUNTRY_CODE: &str = "91";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SendError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Enter a valid 10-digit Indian mobile number starting with 6, 7, 8 or 9")]
    InvalidMobile,
    #[error("Hourly limit reached. You can send up to 5 test messages per hour.")]
    HourlyLimitReached,
    #[error("Too many requests. Please try again {0}.")]
    RateLimited(String),
    #[error("Could not prepare the message: {0}")]
    Encode(String),
    #[error("Network error, please try again: {0}")]
    Network(String),
    #[error("Message could not be sent (status {0}). Please try again.")]
    Status(u16),
}

impl SendError {
    /// Rate-limit failures get their own styling in the form.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, SendError::HourlyLimitReached | SendError::RateLimited(_))
    }
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    INDIAN_MOBILE_RE.is_match(mobile)
}

pub fn validate_send(name: &str, mobile: &str) -> Result<(), SendError> {
    if !is_valid_mobile(mobile.trim()) {
        return Err(SendError::InvalidMobile);
    }
    if name.trim().is_empty() {
        return Err(SendError::MissingName);
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SandboxPayload {
    #[serde(rename = "templateID")]
    pub template_id: String,
    #[serde(rename = "destinationPhone")]
    pub destination_phone: String,
    /// Template slots in order: name, amount, product, brand.
    pub params: [String; 4],
    #[serde(rename = "ctaUrl")]
    pub cta_url: String,
}

impl SandboxPayload {
    pub fn new(name: &str, mobile: &str) -> Self {
        let name = name.trim();
        Self {
            template_id: config::SANDBOX_TEMPLATE_ID.to_string(),
            destination_phone: format!("{}{}", COUNTRY_CODE, mobile.trim()),
            params: [
                name.to_string(),
                DEMO_AMOUNT.to_string(),
                DEMO_PRODUCT.to_string(),
                DEMO_BRAND.to_string(),
            ],
            cta_url: format!(
                "{}/pay/demo?customer={}",
                config::SITE_ORIGIN,
                urlencoding::encode(name)
            ),
        }
    }
}

/// Local gate run before any request: input validation first, then the
/// per-phone limit. Only an `Ok` payload may be sent.
pub fn prepare_send<S: KeyValueStore>(
    limiter: &RateLimiter<S>,
    name: &str,
    mobile: &str,
    now_ms: i64,
) -> Result<SandboxPayload, SendError> {
    validate_send(name, mobile)?;
    let phone = mobile.trim();
    if limiter.check_limit(phone, now_ms) {
        return Err(SendError::HourlyLimitReached);
    }
    Ok(SandboxPayload::new(name, phone))
}

/// Books the outcome of a send against the limiter and returns how many
/// sends are left in the window. Only a delivered message counts; a server
/// 429 spends the whole window.
pub fn settle_send<S: KeyValueStore>(
    limiter: &RateLimiter<S>,
    mobile: &str,
    result: &Result<(), SendError>,
    now_ms: i64,
) -> u32 {
    let phone = mobile.trim();
    match result {
        Ok(()) => {
            let record = limiter.record_attempt(phone, now_ms);
            MAX_SENDS_PER_WINDOW.saturating_sub(record.count)
        }
        Err(SendError::RateLimited(_)) => {
            limiter.mark_exhausted(phone, now_ms);
            0
        }
        Err(_) => limiter.remaining(phone, now_ms),
    }
}

/// Human phrasing for a `Retry-After` header value (seconds or an HTTP date).
pub fn describe_retry_after(header: Option<&str>) -> String {
    let Some(value) = header.map(str::trim).filter(|v| !v.is_empty()) else {
        return "later".to_string();
    };
    match value.parse::<u64>() {
        Ok(0) => "now".to_string(),
        Ok(secs) if secs < 60 => format!("in {} seconds", secs),
        Ok(secs) => {
            let minutes = (secs + 59) / 60;
            if minutes == 1 {
                "in 1 minute".to_string()
            } else {
                format!("in {} minutes", minutes)
            }
        }
        Err(_) => format!("after {}", value),
    }
}

pub async fn send_test_message(
    payload: &SandboxPayload,
    mobile: &str,
    token: Option<&str>,
) -> Result<(), SendError> {
    let mut request = Request::post(config::get_sandbox_endpoint()).header("X-User-Identifier", mobile);
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .json(payload)
        .map_err(|e| SendError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SendError::Network(e.to_string()))?;

    match response.status() {
        429 => {
            let retry_after = response.headers().get("Retry-After");
            Err(SendError::RateLimited(describe_retry_after(retry_after.as_deref())))
        }
        _ if response.ok() => Ok(()),
        status => Err(SendError::Status(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::rate_limit::{storage_key, RateLimitRecord};
    use crate::storage::MemoryStorage;

    const PHONE: &str = "9876543210";
    const T0: i64 = 1_700_000_000_000;

    fn stored(store: &MemoryStorage) -> Option<RateLimitRecord> {
        store
            .get(&storage_key(PHONE))
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    #[test]
    fn mobile_must_start_with_six_to_nine() {
        assert!(is_valid_mobile("9876543210"));
        assert!(is_valid_mobile("6000000000"));
        for bad in ["5876543210", "0876543210", "987654321", "98765432100", "98765 43210", "+919876543210", ""] {
            assert!(!is_valid_mobile(bad), "{}", bad);
            assert_eq!(validate_send("Asha", bad), Err(SendError::InvalidMobile));
        }
    }

    #[test]
    fn name_is_required() {
        assert_eq!(validate_send("  ", "9876543210"), Err(SendError::MissingName));
        assert_eq!(validate_send("Asha", "9876543210"), Ok(()));
    }

    #[test]
    fn payload_uses_template_wire_names() {
        let payload = SandboxPayload::new(" Asha Rao ", "9876543210");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["templateID"], config::SANDBOX_TEMPLATE_ID);
        assert_eq!(json["destinationPhone"], "919876543210");
        assert_eq!(
            json["params"],
            serde_json::json!(["Asha Rao", DEMO_AMOUNT, DEMO_PRODUCT, DEMO_BRAND])
        );
        assert_eq!(json["ctaUrl"], "https://easibill.com/pay/demo?customer=Asha%20Rao");
    }

    #[test]
    fn retry_after_phrasing() {
        assert_eq!(describe_retry_after(None), "later");
        assert_eq!(describe_retry_after(Some("")), "later");
        assert_eq!(describe_retry_after(Some("0")), "now");
        assert_eq!(describe_retry_after(Some("30")), "in 30 seconds");
        assert_eq!(describe_retry_after(Some("60")), "in 1 minute");
        assert_eq!(describe_retry_after(Some("3599")), "in 60 minutes");
        assert_eq!(
            describe_retry_after(Some("Wed, 21 Oct 2026 07:28:00 GMT")),
            "after Wed, 21 Oct 2026 07:28:00 GMT"
        );
    }

    #[test]
    fn rate_limit_errors_are_distinguished() {
        assert!(SendError::HourlyLimitReached.is_rate_limit());
        assert!(SendError::RateLimited("later".into()).is_rate_limit());
        assert!(!SendError::Status(500).is_rate_limit());
        assert_eq!(
            SendError::RateLimited("in 5 minutes".into()).to_string(),
            "Too many requests. Please try again in 5 minutes."
        );
    }

    #[test]
    fn bad_input_is_refused_before_the_limiter_or_network() {
        let store = MemoryStorage::new();
        let limiter = RateLimiter::new(store.clone());
        assert_eq!(
            prepare_send(&limiter, "Asha", "12345", T0),
            Err(SendError::InvalidMobile)
        );
        assert_eq!(prepare_send(&limiter, " ", PHONE, T0), Err(SendError::MissingName));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn spent_window_blocks_the_send() {
        let store = MemoryStorage::new();
        let limiter = RateLimiter::new(store.clone());
        for i in 0..MAX_SENDS_PER_WINDOW {
            let payload = prepare_send(&limiter, "Asha", PHONE, T0 + i as i64);
            assert!(payload.is_ok());
            settle_send(&limiter, PHONE, &Ok(()), T0 + i as i64);
        }
        assert_eq!(
            prepare_send(&limiter, "Asha", PHONE, T0 + 10),
            Err(SendError::HourlyLimitReached)
        );
        assert_eq!(stored(&store).map(|r| r.count), Some(MAX_SENDS_PER_WINDOW));
    }

    #[test]
    fn only_a_delivered_message_is_counted() {
        let store = MemoryStorage::new();
        let limiter = RateLimiter::new(store.clone());

        let payload = prepare_send(&limiter, "Asha", " 9876543210 ", T0).unwrap();
        assert_eq!(payload.destination_phone, "919876543210");
        assert_eq!(stored(&store), None);

        let left = settle_send(&limiter, PHONE, &Err(SendError::Status(500)), T0);
        assert_eq!(left, MAX_SENDS_PER_WINDOW);
        assert_eq!(stored(&store), None);

        let left = settle_send(&limiter, PHONE, &Err(SendError::Network("offline".into())), T0);
        assert_eq!(left, MAX_SENDS_PER_WINDOW);

        let left = settle_send(&limiter, PHONE, &Ok(()), T0 + 1);
        assert_eq!(left, MAX_SENDS_PER_WINDOW - 1);
        assert_eq!(stored(&store), Some(RateLimitRecord { count: 1, timestamp: T0 + 1 }));
    }

    #[test]
    fn server_429_spends_the_window() {
        let store = MemoryStorage::new();
        let limiter = RateLimiter::new(store.clone());
        settle_send(&limiter, PHONE, &Ok(()), T0);

        let left = settle_send(&limiter, PHONE, &Err(SendError::RateLimited("later".into())), T0 + 5);
        assert_eq!(left, 0);
        assert_eq!(
            stored(&store),
            Some(RateLimitRecord { count: MAX_SENDS_PER_WINDOW, timestamp: T0 + 5 })
        );
        assert_eq!(
            prepare_send(&limiter, "Asha", PHONE, T0 + 6),
            Err(SendError::HourlyLimitReached)
        );
    }
}
