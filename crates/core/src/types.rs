//! Domain types shared between the HTTP client and the frontend

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user
///
/// Every field is optional; an absent profile is represented by
/// `Option<UserProfile>`, never by an untyped null-ish value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Account fields for a new employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployeeUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Payload for `POST /employees/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub user: NewEmployeeUser,
    pub position: String,
}

/// Employee record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
}

/// Job position an employee can hold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosition {
    pub id: i64,
    pub name: String,
}

/// Offered service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Payload for `POST /services/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// One service line inside an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub service: i64,
    pub quantity: u32,
}

/// Payload for `POST /orders/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer: i64,
    pub services: Vec<OrderLine>,
    pub note: String,
}

/// Order record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub status: String,
    pub total_amount: f64,
    #[serde(default)]
    pub note: Option<String>,
}

/// Customer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_profile_tolerates_missing_fields() {
        let profile: UserProfile = serde_json::from_str(r#"{"name":"Admin"}"#).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Admin"));
        assert_eq!(profile.role, None);
        assert_eq!(profile.avatar, None);
    }

    #[test]
    fn new_employee_serializes_nested_user() {
        let employee = NewEmployee {
            user: NewEmployeeUser {
                username: "jdoe".into(),
                email: "jdoe@example.com".into(),
                password: "secret".into(),
                first_name: "Jane".into(),
                last_name: "Doe".into(),
            },
            position: "Technician".into(),
        };
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["user"]["username"], "jdoe");
        assert_eq!(value["position"], "Technician");
    }
}
