//! Wire forms for the profile endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::profile::Profile;

/// Request body for `POST /api/profile`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub display_name: Option<String>,
    pub tee_shirt_size: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub display_name: String,
    pub main_email: String,
    pub tee_shirt_size: String,
    pub conference_keys_to_attend: Vec<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            display_name: profile.display_name,
            main_email: profile.main_email,
            tee_shirt_size: profile.tee_shirt_size.to_string(),
            conference_keys_to_attend: profile
                .conference_keys_to_attend
                .iter()
                .map(|k| k.to_websafe())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AuthenticatedUser, UserId};

    #[test]
    fn new_profile_renders_defaults() {
        let user = AuthenticatedUser::new(
            UserId::new("user-1").unwrap(),
            "ada@example.com",
            Some("Ada".to_string()),
        );
        let json = serde_json::to_value(ProfileResponse::from(Profile::for_user(&user))).unwrap();

        assert_eq!(json["mainEmail"], "ada@example.com");
        assert_eq!(json["teeShirtSize"], "NOT_SPECIFIED");
        assert_eq!(json["conferenceKeysToAttend"], serde_json::json!([]));
    }

    #[test]
    fn form_fields_are_optional() {
        let form: ProfileForm = serde_json::from_str(r#"{"teeShirtSize":"XL_W"}"#).unwrap();
        assert!(form.display_name.is_none());
        assert_eq!(form.tee_shirt_size.as_deref(), Some("XL_W"));
    }
}
