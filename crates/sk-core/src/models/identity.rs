use crate::Role;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const AVATAR_SERVICE_URL: &str = "https://ui-avatars.com/api/";
const ADMIN_AVATAR_BACKGROUND: &str = "5D3A00";
const STANDARD_AVATAR_BACKGROUND: &str = "8B5A2B";

/// Profile of an authenticated user.
///
/// Serialized with the field names the web client has always written to
/// local storage, so previously persisted sessions stay readable.
/// Never patched in place: the session store replaces it as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub email: String,
    pub role: Role,
    #[serde(rename = "avatar", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub joined_date: NaiveDate,
}

impl Identity {
    /// Builds a standard (non-administrator) identity with a generated avatar.
    pub fn standard(
        id: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        joined_date: NaiveDate,
    ) -> Self {
        let display_name = display_name.into();
        let avatar_url = Some(Self::avatar_url_for(&display_name, Role::Standard));

        Self {
            id: id.into(),
            display_name,
            email: email.into(),
            role: Role::Standard,
            avatar_url,
            phone,
            joined_date,
        }
    }

    /// Builds an administrator identity with a generated avatar.
    pub fn administrator(
        id: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
        joined_date: NaiveDate,
    ) -> Self {
        let display_name = display_name.into();
        let avatar_url = Some(Self::avatar_url_for(&display_name, Role::Administrator));

        Self {
            id: id.into(),
            display_name,
            email: email.into(),
            role: Role::Administrator,
            avatar_url,
            phone: None,
            joined_date,
        }
    }

    /// Initials avatar URL, tinted by role.
    pub fn avatar_url_for(display_name: &str, role: Role) -> String {
        let background = match role {
            Role::Administrator => ADMIN_AVATAR_BACKGROUND,
            Role::Standard => STANDARD_AVATAR_BACKGROUND,
        };

        format!(
            "{AVATAR_SERVICE_URL}?name={}&background={background}&color=fff",
            display_name.replace(' ', "+")
        )
    }

    pub fn is_administrator(&self) -> bool {
        self.role == Role::Administrator
    }
}
