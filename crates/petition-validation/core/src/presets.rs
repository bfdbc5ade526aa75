//! Built-in schemas for the petition client's forms
//!
//! Limits follow the backend: names and passwords up to 64 characters, emails
//! up to 256, petition and tier titles up to 128, descriptions up to 1024.

use std::collections::BTreeMap;

use crate::form::FormSchema;
use crate::rules::{NumberRules, StringRules};

pub const REGISTER: &str = "register";
pub const LOGIN: &str = "login";
pub const EDIT_PROFILE: &str = "editProfile";
pub const CREATE_PETITION: &str = "createPetition";
pub const EDIT_PETITION: &str = "editPetition";
pub const SUPPORT_TIER: &str = "supportTier";
pub const SUPPORT_MESSAGE: &str = "supportMessage";

fn name_rules() -> StringRules {
    StringRules::new().required().max_length(64)
}

fn email_rules() -> StringRules {
    StringRules::new().required().max_length(256).email()
}

fn password_rules() -> StringRules {
    StringRules::new().required().min_length(6).max_length(64)
}

fn title_rules() -> StringRules {
    StringRules::new().required().max_length(128)
}

fn description_rules() -> StringRules {
    StringRules::new().required().max_length(1024)
}

pub fn register() -> FormSchema {
    FormSchema::new()
        .field("firstName", name_rules())
        .field("lastName", name_rules())
        .field("email", email_rules())
        .field("password", password_rules())
}

pub fn login() -> FormSchema {
    FormSchema::new()
        .field("email", email_rules())
        .field("password", StringRules::new().required().max_length(64))
}

/// Password change is optional. Length rules also judge an empty value, so
/// neither password field carries a minimum.
pub fn edit_profile() -> FormSchema {
    FormSchema::new()
        .field("firstName", name_rules())
        .field("lastName", name_rules())
        .field("email", email_rules())
        .field("currentPassword", StringRules::new().max_length(64))
        .field("newPassword", StringRules::new().max_length(64))
}

pub fn create_petition() -> FormSchema {
    FormSchema::new()
        .field("title", title_rules())
        .field("description", description_rules())
        .field("categoryId", NumberRules::new().required().integer().min_value(1.0))
}

pub fn edit_petition() -> FormSchema {
    create_petition()
}

pub fn support_tier() -> FormSchema {
    FormSchema::new()
        .field("title", title_rules())
        .field("description", description_rules())
        .field("cost", NumberRules::new().required().integer().min_value(0.0))
}

/// Optional note left when pledging support
pub fn support_message() -> FormSchema {
    FormSchema::new().field("message", StringRules::new().max_length(512))
}

/// Look up a preset by form name
pub fn by_name(name: &str) -> Option<FormSchema> {
    let schema = match name {
        REGISTER => register(),
        LOGIN => login(),
        EDIT_PROFILE => edit_profile(),
        CREATE_PETITION => create_petition(),
        EDIT_PETITION => edit_petition(),
        SUPPORT_TIER => support_tier(),
        SUPPORT_MESSAGE => support_message(),
        _ => return None,
    };
    Some(schema)
}

/// Every preset keyed by form name
pub fn all() -> BTreeMap<String, FormSchema> {
    [
        REGISTER,
        LOGIN,
        EDIT_PROFILE,
        CREATE_PETITION,
        EDIT_PETITION,
        SUPPORT_TIER,
        SUPPORT_MESSAGE,
    ]
    .into_iter()
    .filter_map(|name| by_name(name).map(|schema| (name.to_string(), schema)))
    .collect()
}
