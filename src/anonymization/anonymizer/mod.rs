//! Replacement text for detected PII
//!
//! Every [`EntityKind`] maps to exactly one transform in [`masking`].

pub mod masking;

use crate::anonymization::models::EntityKind;
use crate::anonymization::providers::DateNormalizer;

/// Compute the replacement for a matched substring of the given kind
pub fn mask_entity(kind: EntityKind, value: &str, dates: &dyn DateNormalizer) -> String {
    match kind {
        EntityKind::Address => masking::ADDRESS_TOKEN.to_string(),
        EntityKind::Iban => masking::mask_iban(value),
        EntityKind::Rib => masking::mask_rib(value),
        EntityKind::DateNumeric | EntityKind::DateAlpha => masking::mask_date(value, dates),
        EntityKind::Passport => masking::mask_passport(value),
        EntityKind::DrivingLicense => masking::LICENSE_TOKEN.to_string(),
        EntityKind::VehiclePlate => masking::PLATE_TOKEN.to_string(),
        EntityKind::Card => masking::mask_card(value),
        EntityKind::Email => masking::mask_email(value),
        EntityKind::NationalId => masking::mask_national_id(value),
        EntityKind::Phone => masking::mask_phone(value),
        EntityKind::Person => masking::mask_person(value),
    }
}
