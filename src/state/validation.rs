//! Client-side form validation.
//!
//! Rejects obviously invalid input before a network round trip. The server
//! is the final authority; these checks only mirror its cheapest rules.
//! Checks run in a fixed order (name, email, password, confirmation) and the
//! first failing check wins.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const NAME_ERROR: &str = "El nombre debe tener al menos 2 caracteres";
pub const EMAIL_ERROR: &str = "Por favor ingresa un correo válido";
pub const PASSWORD_ERROR: &str = "La contraseña debe tener al menos 6 caracteres";
pub const CONFIRM_ERROR: &str = "Las contraseñas no coinciden";

/// Minimum name length (trimmed characters).
pub const MIN_NAME_LEN: usize = 2;
/// Minimum password length (characters).
pub const MIN_PASSWORD_LEN: usize = 6;

/// Name check: at least two characters after trimming.
pub fn valid_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_LEN
}

/// Two-part email shape: non-empty local part, `@`, domain containing a dot.
/// No whitespace anywhere. Deeper RFC compliance is not attempted.
pub fn valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Password check: minimum length only, no complexity rules.
pub fn valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Confirmation check: byte-for-byte equal and non-empty.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation && !confirmation.is_empty()
}

/// Values of the login form fields.
#[derive(Clone, Debug, Default)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl LoginFields {
    /// First failing check (email, then password), or `None` when valid.
    pub fn first_error(&self) -> Option<&'static str> {
        if !valid_email(&self.email) {
            return Some(EMAIL_ERROR);
        }
        if !valid_password(&self.password) {
            return Some(PASSWORD_ERROR);
        }
        None
    }
}

/// Values of the register form fields.
#[derive(Clone, Debug, Default)]
pub struct RegisterFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

impl RegisterFields {
    /// The four checks in submission order.
    pub fn checks(&self) -> [bool; 4] {
        [
            valid_name(&self.name),
            valid_email(&self.email),
            valid_password(&self.password),
            passwords_match(&self.password, &self.password2),
        ]
    }

    /// First failing check in fixed order, or `None` when valid.
    pub fn first_error(&self) -> Option<&'static str> {
        let [name, email, password, confirm] = self.checks();
        if !name {
            return Some(NAME_ERROR);
        }
        if !email {
            return Some(EMAIL_ERROR);
        }
        if !password {
            return Some(PASSWORD_ERROR);
        }
        if !confirm {
            return Some(CONFIRM_ERROR);
        }
        None
    }

    /// Strict AND of all checks; the only thing that gates submission.
    pub fn is_complete(&self) -> bool {
        self.checks().into_iter().all(|ok| ok)
    }

    /// Percentage of checks satisfied, for the progress bar only. Has no
    /// effect on whether submission is permitted.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn progress(&self) -> u8 {
        let checks = self.checks();
        let satisfied = checks.iter().filter(|ok| **ok).count();
        ((satisfied as f64 / checks.len() as f64) * 100.0).round() as u8
    }
}
