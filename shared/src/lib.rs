//! Data models and list-view logic shared between the TK Expedited frontend
//! and the backend API contract.
//!
//! The wire shapes use camelCase field names because the backend speaks the
//! same JSON the legacy clients did. Everything stateful here is plain data;
//! the frontend owns timers, network calls, and rendering.

use serde::{Deserialize, Serialize};

pub mod edits;
pub mod pager;
pub mod roles;
pub mod summary;
pub mod validate;

/// One admin-managed user record.
///
/// `roles` stays a list of raw tag strings: the server may grow new roles
/// before the client learns about them, and unrecognized tags must be carried
/// through untouched rather than rejected at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub roles: Vec<String>,
    pub is_approved: bool,
}

/// Partial update body for `PUT /api/admin/users/{id}`.
///
/// Only the fields being changed are serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// One carrier onboarding record as listed in the admin dashboard.
///
/// Truck/driver counts are strings on the wire; the intake form never
/// normalized them and the dashboard only displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    pub id: i64,
    pub company_name: String,
    pub dba: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    pub mc: String,
    pub usdot: String,
    pub fein_ssn: String,
    pub number_of_trucks: String,
    pub number_of_drivers: String,
    pub factor_invoices: String,
    pub preferred_states: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

/// Quote request captured by the home-page modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pickup_location: String,
    pub delivery_location: String,
}

/// Driver job application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub experience: String,
    pub cdl_number: String,
    pub cdl_state: String,
    pub cdl_expiration: String,
    pub violations: String,
    pub accidents: String,
    pub equipment: String,
    pub availability: String,
    pub message: String,
}

/// Contact form message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

/// Newsletter signup captured in the footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSignup {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Identity information returned by `GET /api/auth/user-info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_decodes_camel_case_wire_shape() {
        let raw = r#"{
            "id": 7,
            "email": "dispatch@example.com",
            "displayName": "Dispatch Desk",
            "roles": ["dispatcher", "night-shift"],
            "isApproved": false
        }"#;
        let user: User = serde_json::from_str(raw).expect("valid user json");
        assert_eq!(user.id, 7);
        assert_eq!(user.display_name, "Dispatch Desk");
        // Unknown role tags survive decoding untouched.
        assert_eq!(user.roles, vec!["dispatcher", "night-shift"]);
        assert!(!user.is_approved);
    }

    #[test]
    fn user_patch_serializes_only_changed_fields() {
        let patch = UserPatch {
            display_name: Some("New Name".to_string()),
            roles: None,
        };
        let body = serde_json::to_string(&patch).expect("serializable patch");
        assert_eq!(body, r#"{"displayName":"New Name"}"#);
    }

    #[test]
    fn carrier_tolerates_missing_documents() {
        let raw = r#"{
            "id": 1,
            "companyName": "Haul Co",
            "dba": "",
            "address": "1 Main St",
            "city": "Dayton",
            "zipCode": "45011",
            "phone": "5135559653",
            "email": "ops@haul.co",
            "mc": "MC123",
            "usdot": "456",
            "feinSsn": "12-3456789",
            "numberOfTrucks": "4",
            "numberOfDrivers": "6",
            "factorInvoices": "No",
            "preferredStates": "OH, KY, IN"
        }"#;
        let carrier: Carrier = serde_json::from_str(raw).expect("valid carrier json");
        assert!(carrier.documents.is_empty());
    }
}
