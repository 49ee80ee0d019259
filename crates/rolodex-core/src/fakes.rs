//! Random contact-data generation.
//!
//! Wraps the `fake` crate to produce plausible user fields. The address is
//! composed onto a single line from its parts; consumers rely on it
//! containing no newline characters.

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;

use crate::model::NewUser;
use crate::{Error, Result};

/// Generate a plausible random user.
///
/// # Errors
///
/// `Error::Generation` if the generator yields an empty field or a
/// multi-line address. Not expected to occur in practice.
pub fn fake_new_user() -> Result<NewUser> {
    let address = format!(
        "{} {}, {}, {} {}",
        BuildingNumber().fake::<String>(),
        StreetName().fake::<String>(),
        CityName().fake::<String>(),
        StateAbbr().fake::<String>(),
        ZipCode().fake::<String>(),
    );
    let user = NewUser {
        name: Name().fake(),
        email: SafeEmail().fake(),
        address,
        phone: PhoneNumber().fake(),
    };
    validate(&user)?;
    Ok(user)
}

/// Check the generated fields satisfy the contract callers rely on.
fn validate(user: &NewUser) -> Result<()> {
    for (field, value) in [
        ("name", &user.name),
        ("email", &user.email),
        ("address", &user.address),
        ("phone", &user.phone),
    ] {
        if value.is_empty() {
            return Err(Error::generation(format!("empty {field}")));
        }
    }
    if user.address.contains('\n') {
        return Err(Error::generation("address contains a newline"));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
