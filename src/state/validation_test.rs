use super::*;

// =============================================================
// Field checks
// =============================================================

#[test]
fn name_requires_two_trimmed_characters() {
    assert!(!valid_name(""));
    assert!(!valid_name("A"));
    assert!(!valid_name("  A  "));
    assert!(valid_name("An"));
    assert!(valid_name("  Ana  "));
}

#[test]
fn email_requires_local_at_domain_with_dot() {
    assert!(valid_email("a@b.com"));
    assert!(valid_email("user.name@sub.domain.org"));

    assert!(!valid_email(""));
    assert!(!valid_email("bad-email"));
    assert!(!valid_email("@b.com"));
    assert!(!valid_email("a@b"));
    assert!(!valid_email("a@b."));
    assert!(!valid_email("a@.com"));
    assert!(!valid_email("a b@c.com"));
    assert!(!valid_email("a@b@c.com"));
}

#[test]
fn password_requires_six_characters() {
    assert!(!valid_password("12345"));
    assert!(valid_password("123456"));
    assert!(valid_password("contraseña"));
}

#[test]
fn confirmation_must_match_and_be_non_empty() {
    assert!(passwords_match("secret1", "secret1"));
    assert!(!passwords_match("secret1", "secret2"));
    assert!(!passwords_match("", ""));
}

// =============================================================
// Login fields
// =============================================================

#[test]
fn login_first_error_is_email_then_password() {
    let f = LoginFields {
        email: "bad".to_owned(),
        password: "123".to_owned(),
    };
    assert_eq!(f.first_error(), Some(EMAIL_ERROR));

    let f = LoginFields {
        email: "a@b.com".to_owned(),
        password: "123".to_owned(),
    };
    assert_eq!(f.first_error(), Some(PASSWORD_ERROR));

    let f = LoginFields {
        email: "a@b.com".to_owned(),
        password: "secret1".to_owned(),
    };
    assert_eq!(f.first_error(), None);
}

// =============================================================
// Register fields
// =============================================================

fn fields(name: &str, email: &str, password: &str, password2: &str) -> RegisterFields {
    RegisterFields {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        password2: password2.to_owned(),
    }
}

#[test]
fn first_failing_check_wins_in_fixed_order() {
    // Name too short AND email invalid: name is reported.
    let f = fields("A", "bad-email", "123456", "123456");
    assert_eq!(f.first_error(), Some(NAME_ERROR));

    let f = fields("Ana", "bad-email", "123", "x");
    assert_eq!(f.first_error(), Some(EMAIL_ERROR));

    let f = fields("Ana", "a@b.com", "123", "123");
    assert_eq!(f.first_error(), Some(PASSWORD_ERROR));

    let f = fields("Ana", "a@b.com", "123456", "654321");
    assert_eq!(f.first_error(), Some(CONFIRM_ERROR));

    let f = fields("Ana", "a@b.com", "123456", "123456");
    assert_eq!(f.first_error(), None);
}

#[test]
fn submission_permitted_iff_all_four_checks_pass() {
    // Exhaustive table over the four checks: valid/invalid value per slot.
    let names = ["Ana", "A"];
    let emails = ["a@b.com", "bad-email"];
    let passwords = ["123456", "123"];

    for (ni, name) in names.iter().enumerate() {
        for (ei, email) in emails.iter().enumerate() {
            for (pi, password) in passwords.iter().enumerate() {
                for confirm_ok in [true, false] {
                    let password2 = if confirm_ok { (*password).to_owned() } else { String::new() };
                    let f = fields(name, email, password, &password2);
                    let all_ok = ni == 0 && ei == 0 && pi == 0 && confirm_ok;
                    assert_eq!(
                        f.is_complete(),
                        all_ok,
                        "name={name} email={email} password={password} confirm_ok={confirm_ok}"
                    );
                }
            }
        }
    }
}

#[test]
fn progress_counts_satisfied_checks() {
    assert_eq!(fields("A", "bad", "1", "").progress(), 0);
    assert_eq!(fields("Ana", "bad", "1", "").progress(), 25);
    assert_eq!(fields("Ana", "a@b.com", "1", "").progress(), 50);
    assert_eq!(fields("Ana", "a@b.com", "123456", "nope").progress(), 75);
    assert_eq!(fields("Ana", "a@b.com", "123456", "123456").progress(), 100);
}

#[test]
fn progress_never_gates_submission() {
    // 75% complete is still not submittable.
    let f = fields("Ana", "a@b.com", "123456", "nope");
    assert_eq!(f.progress(), 75);
    assert!(!f.is_complete());
}
