//! Submission payload schema

use crate::error::FormError;
use crate::host::HostUser;
use crate::state::{FieldId, VetCallForm};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// The structured request handed to the host's outbound channel.
///
/// Every declared field is present as a trimmed string, optional ones may be
/// empty. Built only through [`SubmissionPayload::from_form`], which refuses
/// to build a payload while a required field is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub pet_type: String,
    pub pet_name: String,
    pub pet_age: String,
    pub problem: String,
    pub urgency: String,
    pub preferred_time: String,
    pub comments: String,
    #[serde(serialize_with = "serialize_iso8601")]
    pub timestamp: DateTime<Utc>,
    pub user_id: Option<i64>,
    pub username: Option<String>,
}

impl SubmissionPayload {
    /// Assemble a payload from the form and the host's (possibly absent) user
    pub fn from_form(
        form: &VetCallForm,
        user: Option<&HostUser>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, FormError> {
        for field in form.required_fields() {
            field.check().map_err(|source| FormError::Validation {
                field: field.id,
                source,
            })?;
        }

        let value = |id: FieldId| form.field(id).trimmed().to_string();

        Ok(Self {
            name: value(FieldId::Name),
            phone: value(FieldId::Phone),
            address: value(FieldId::Address),
            pet_type: value(FieldId::PetType),
            pet_name: value(FieldId::PetName),
            pet_age: value(FieldId::PetAge),
            problem: value(FieldId::Problem),
            urgency: value(FieldId::Urgency),
            preferred_time: value(FieldId::PreferredTime),
            comments: value(FieldId::Comments),
            timestamp,
            user_id: user.map(|u| u.id).filter(|id| *id != 0),
            username: user
                .and_then(|u| u.username.clone())
                .filter(|name| !name.is_empty()),
        })
    }

    /// Value of one declared field
    pub fn field(&self, id: FieldId) -> &str {
        match id {
            FieldId::Name => &self.name,
            FieldId::Phone => &self.phone,
            FieldId::Address => &self.address,
            FieldId::PetType => &self.pet_type,
            FieldId::PetName => &self.pet_name,
            FieldId::PetAge => &self.pet_age,
            FieldId::Problem => &self.problem,
            FieldId::Urgency => &self.urgency,
            FieldId::PreferredTime => &self.preferred_time,
            FieldId::Comments => &self.comments,
        }
    }

    /// Serialize into the single message the outbound channel accepts
    pub fn to_message(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// `2024-05-01T09:30:00.123Z`: UTC, millisecond precision
fn serialize_iso8601<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn filled_form() -> VetCallForm {
        let mut form = VetCallForm::new();
        form.set_value(FieldId::Name, "  Мария Иванова ");
        form.set_value(FieldId::Phone, "+7 (999) 123-45-67");
        form.set_value(FieldId::Address, "г. Москва, ул. Ленина, 10");
        form.set_value(FieldId::Problem, "Собака не ест второй день");
        form.set_value(FieldId::PetType, "dog");
        form
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_wire_shape() {
        let user = HostUser {
            id: 123456,
            first_name: "Мария".to_string(),
            last_name: None,
            username: Some("maria".to_string()),
        };
        let payload = SubmissionPayload::from_form(&filled_form(), Some(&user), fixed_time()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload.to_message().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "Мария Иванова",
                "phone": "+7 (999) 123-45-67",
                "address": "г. Москва, ул. Ленина, 10",
                "pet_type": "dog",
                "pet_name": "",
                "pet_age": "",
                "problem": "Собака не ест второй день",
                "urgency": "",
                "preferred_time": "",
                "comments": "",
                "timestamp": "2024-05-01T09:30:00.000Z",
                "user_id": 123456,
                "username": "maria"
            })
        );
    }

    #[test]
    fn test_missing_user_serializes_nulls() {
        let payload = SubmissionPayload::from_form(&filled_form(), None, fixed_time()).unwrap();
        assert!(payload.user_id.is_none());
        assert!(payload.username.is_none());

        let value: serde_json::Value = serde_json::from_str(&payload.to_message().unwrap()).unwrap();
        assert!(value["user_id"].is_null());
        assert!(value["username"].is_null());
        assert_eq!(value["name"], "Мария Иванова");
    }

    #[test]
    fn test_zero_id_and_empty_username_are_absent() {
        let user = HostUser {
            id: 0,
            first_name: "Мария".to_string(),
            last_name: None,
            username: Some(String::new()),
        };
        let payload = SubmissionPayload::from_form(&filled_form(), Some(&user), fixed_time()).unwrap();
        assert_eq!(payload.user_id, None);
        assert_eq!(payload.username, None);
    }

    #[test]
    fn test_refuses_invalid_required_field() {
        let mut form = filled_form();
        form.set_value(FieldId::Phone, "12345");
        let err = SubmissionPayload::from_form(&form, None, fixed_time()).unwrap_err();
        assert!(matches!(
            err,
            FormError::Validation {
                field: FieldId::Phone,
                source: ValidationError::InvalidPhone
            }
        ));
    }

    #[test]
    fn test_field_accessor_matches_form() {
        let form = filled_form();
        let payload = SubmissionPayload::from_form(&form, None, fixed_time()).unwrap();
        for id in FieldId::ALL {
            assert_eq!(payload.field(id), form.field(id).trimmed());
        }
    }
}
