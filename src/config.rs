#[cfg(debug_assertions)]
pub fn get_lead_endpoint() -> &'static str {
    "http://localhost:3001/api/leads"  // Local mock while developing
}

#[cfg(not(debug_assertions))]
pub fn get_lead_endpoint() -> &'static str {
    "https://api.easibill.com/v1/leads"
}

#[cfg(debug_assertions)]
pub fn get_sandbox_endpoint() -> &'static str {
    "http://localhost:3001/api/whatsapp/send-template"
}

#[cfg(not(debug_assertions))]
pub fn get_sandbox_endpoint() -> &'static str {
    "https://api.easibill.com/v1/whatsapp/send-template"
}

/// Where the "Open dashboard" links point. The marketing site never talks to it directly.
pub const APP_URL: &str = "https://app.easibill.com";

pub const SITE_ORIGIN: &str = "https://easibill.com";

pub const SANDBOX_TEMPLATE_ID: &str = "invoice_payment_reminder_v2";
