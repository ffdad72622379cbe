//! Lead form fields and their validators.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid mobile regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LeadField {
    Name,
    Email,
    Mobile,
    CompanyName,
    Location,
}

impl LeadField {
    /// JSON key the lead endpoint expects.
    pub fn key(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Mobile => "mobile",
            LeadField::CompanyName => "companyName",
            LeadField::Location => "location",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
        }
    }
}

pub type Validator = fn(&str) -> Option<String>;

/// One wizard step.
#[derive(Clone, Copy)]
pub struct FieldDescriptor {
    pub field: LeadField,
    pub label: &'static str,
    pub icon: &'static str,
    pub input: InputKind,
    pub placeholder: &'static str,
    pub validator: Validator,
}

impl PartialEq for FieldDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field
    }
}

fn validate_name(value: &str) -> Option<String> {
    required(value, "Name")
}

fn validate_email(value: &str) -> Option<String> {
    required(value, "Email").or_else(|| {
        (!EMAIL_RE.is_match(value)).then(|| "Please enter a valid email address".to_string())
    })
}

fn validate_mobile(value: &str) -> Option<String> {
    required(value, "Mobile number").or_else(|| {
        (!MOBILE_RE.is_match(value)).then(|| "Mobile number must be exactly 10 digits".to_string())
    })
}

fn validate_company(value: &str) -> Option<String> {
    required(value, "Company name")
}

fn validate_location(value: &str) -> Option<String> {
    required(value, "Location")
}

fn required(value: &str, label: &str) -> Option<String> {
    value.trim().is_empty().then(|| format!("{} is required", label))
}

pub const FIELD_COUNT: usize = 5;

pub static FIELDS: [FieldDescriptor; FIELD_COUNT] = [
    FieldDescriptor {
        field: LeadField::Name,
        label: "What's your name?",
        icon: "👤",
        input: InputKind::Text,
        placeholder: "Full name",
        validator: validate_name,
    },
    FieldDescriptor {
        field: LeadField::Email,
        label: "Your work email",
        icon: "✉️",
        input: InputKind::Email,
        placeholder: "you@company.com",
        validator: validate_email,
    },
    FieldDescriptor {
        field: LeadField::Mobile,
        label: "Mobile number",
        icon: "📱",
        input: InputKind::Tel,
        placeholder: "10-digit mobile number",
        validator: validate_mobile,
    },
    FieldDescriptor {
        field: LeadField::CompanyName,
        label: "Company name",
        icon: "🏢",
        input: InputKind::Text,
        placeholder: "Acme Traders Pvt Ltd",
        validator: validate_company,
    },
    FieldDescriptor {
        field: LeadField::Location,
        label: "Where are you based?",
        icon: "📍",
        input: InputKind::Text,
        placeholder: "City, State",
        validator: validate_location,
    },
];

pub fn descriptor(field: LeadField) -> &'static FieldDescriptor {
    FIELDS
        .iter()
        .find(|d| d.field == field)
        .unwrap_or(&FIELDS[0])
}

pub fn validate_field(field: LeadField, value: &str) -> Option<String> {
    (descriptor(field).validator)(value)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFormData {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub company_name: String,
    pub location: String,
}

impl LeadFormData {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Mobile => &self.mobile,
            LeadField::CompanyName => &self.company_name,
            LeadField::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Mobile => self.mobile = value,
            LeadField::CompanyName => self.company_name = value,
            LeadField::Location => self.location = value,
        }
    }
}

pub type ValidationErrors = BTreeMap<LeadField, String>;

pub fn validate_all(data: &LeadFormData) -> ValidationErrors {
    FIELDS
        .iter()
        .filter_map(|d| (d.validator)(data.get(d.field)).map(|err| (d.field, err)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_reject_blank_values() {
        for d in FIELDS.iter() {
            assert!(validate_field(d.field, "").is_some(), "{:?}", d.field);
            assert!(validate_field(d.field, "   ").is_some(), "{:?}", d.field);
        }
        assert_eq!(validate_field(LeadField::Name, "").as_deref(), Some("Name is required"));
    }

    #[test]
    fn mobile_needs_exactly_ten_digits() {
        assert_eq!(validate_field(LeadField::Mobile, "9876543210"), None);
        assert_eq!(validate_field(LeadField::Mobile, "0123456789"), None);
        assert!(validate_field(LeadField::Mobile, "987654321").is_some());
        assert!(validate_field(LeadField::Mobile, "98765432101").is_some());
        assert!(validate_field(LeadField::Mobile, "98765-4321").is_some());
    }

    #[test]
    fn padded_contact_values_are_rejected_as_typed() {
        assert!(validate_field(LeadField::Mobile, " 9876543210 ").is_some());
        assert!(validate_field(LeadField::Email, " a@b.com ").is_some());
        assert_eq!(validate_field(LeadField::Name, " Asha "), None);
    }

    #[test]
    fn email_needs_basic_shape() {
        assert_eq!(validate_field(LeadField::Email, "a@b.com"), None);
        assert!(validate_field(LeadField::Email, "a@b").is_some());
        assert!(validate_field(LeadField::Email, "a b@c.com").is_some());
        assert!(validate_field(LeadField::Email, "@b.com").is_some());
    }

    #[test]
    fn form_data_serializes_with_endpoint_keys() {
        let data = LeadFormData {
            name: "A".into(),
            email: "a@b.com".into(),
            mobile: "9876543210".into(),
            company_name: "C".into(),
            location: "L".into(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "mobile": "9876543210",
                "companyName": "C",
                "location": "L",
            })
        );
        for d in FIELDS.iter() {
            assert!(json.get(d.field.key()).is_some());
        }
    }

    #[test]
    fn validate_all_reports_every_bad_field() {
        let mut data = LeadFormData::default();
        assert_eq!(validate_all(&data).len(), 5);
        data.set(LeadField::Name, "A".into());
        data.set(LeadField::Mobile, "123".into());
        let errors = validate_all(&data);
        assert!(!errors.contains_key(&LeadField::Name));
        assert!(errors.contains_key(&LeadField::Mobile));
        assert_eq!(errors.len(), 4);
    }
}
