use serde::{Deserialize, Serialize};

/// Phone number in E.164 form (`+` country code subscriber number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub e164: String,
}

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.e164
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneError {
    #[error("phone number is required")]
    Empty,
    #[error("phone number may only contain digits, spaces, and ( ) - . +")]
    InvalidCharacters,
    #[error("phone number has {digits} digits; expected a 10-digit US number or +country code")]
    InvalidLength { digits: usize },
    #[error("US area codes cannot start with 0 or 1")]
    InvalidAreaCode,
    #[error("country codes cannot start with 0")]
    InvalidCountryCode,
}

/// Normalizes free-form input to E.164, assuming a US number when no `+` is given.
pub fn normalize_phone_number(input: &str) -> Result<PhoneNumber, PhoneError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PhoneError::Empty);
    }

    let (international, rest) = match trimmed.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut digits = String::with_capacity(rest.len());
    for ch in rest.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return Err(PhoneError::InvalidCharacters),
        }
    }

    if international {
        if !(8..=15).contains(&digits.len()) {
            return Err(PhoneError::InvalidLength {
                digits: digits.len(),
            });
        }
        if digits.starts_with('0') {
            return Err(PhoneError::InvalidCountryCode);
        }
        if digits.starts_with('1') && digits.len() == 11 {
            check_area_code(&digits[1..])?;
        }
        return Ok(PhoneNumber {
            e164: format!("+{digits}"),
        });
    }

    let national = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('1') => &digits[1..],
        count => return Err(PhoneError::InvalidLength { digits: count }),
    };
    check_area_code(national)?;

    Ok(PhoneNumber {
        e164: format!("+1{national}"),
    })
}

fn check_area_code(national: &str) -> Result<(), PhoneError> {
    if national.starts_with(['0', '1']) {
        return Err(PhoneError::InvalidAreaCode);
    }
    Ok(())
}
