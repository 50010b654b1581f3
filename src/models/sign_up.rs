use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Characters that count as a symbol for the "number or symbol" password rule.
pub const PASSWORD_SYMBOLS: &str = "{}[]/?.,;:|)*~`!^-_+<>@#$%&\\=('\"";

/// True when the password is unusable because it is empty, the last name is
/// missing, or it contains the last name or the email's local part.
///
/// Matching is a literal, case-sensitive substring search.
pub fn has_name_or_email_in_password(password: &str, lastname: &str, email: &str) -> bool {
    password.is_empty()
        || lastname.is_empty()
        || password.contains(lastname)
        || password.contains(email_local_part(email))
}

pub fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LENGTH
}

pub fn has_number_or_symbol(password: &str) -> bool {
    password
        .chars()
        .any(|c| c.is_ascii_digit() || PASSWORD_SYMBOLS.contains(c))
}

/// Text before the first `@`, or the whole address when there is none.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Keeps only the digits of a month option such as `"3 - March"`.
pub fn numeric_month(month: &str) -> String {
    month.chars().filter(char::is_ascii_digit).collect()
}

/// Result of the three password rules, used for the hint indicators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordChecks {
    pub has_name_or_email: bool,
    pub meets_min_length: bool,
    pub has_number_or_symbol: bool,
}

impl PasswordChecks {
    pub fn new(password: &str, lastname: &str, email: &str) -> Self {
        Self {
            has_name_or_email: has_name_or_email_in_password(password, lastname, email),
            meets_min_length: meets_min_length(password),
            has_number_or_symbol: has_number_or_symbol(password),
        }
    }

    pub fn all_pass(&self) -> bool {
        !self.has_name_or_email && self.meets_min_length && self.has_number_or_symbol
    }
}

/// Values typed into the sign-up form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpDraft {
    pub email: String,
    pub lastname: String,
    pub firstname: String,
    pub password: String,
    pub birth_year: Option<String>,
    pub birth_day: Option<String>,
    pub birth_month: Option<String>,
}

impl SignUpDraft {
    pub fn password_checks(&self) -> PasswordChecks {
        PasswordChecks::new(&self.password, &self.lastname, &self.email)
    }

    pub fn is_valid(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());

        !self.email.is_empty()
            && !self.lastname.is_empty()
            && !self.firstname.is_empty()
            && filled(&self.birth_month)
            && filled(&self.birth_day)
            && filled(&self.birth_year)
            && !self.password.is_empty()
            && self.password_checks().all_pass()
    }

    /// Composes `year-month-day` from the selectors, `None` if a part is
    /// missing or the date does not exist.
    pub fn birthday(&self) -> Option<NaiveDate> {
        let year = self.birth_year.as_deref()?.trim().parse::<i32>().ok()?;
        let month = numeric_month(self.birth_month.as_deref()?).parse::<u32>().ok()?;
        let day = self.birth_day.as_deref()?.trim().parse::<u32>().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    pub fn to_body(&self) -> Option<SignUpBody> {
        Some(SignUpBody {
            email: self.email.clone(),
            lastname: self.lastname.clone(),
            firstname: self.firstname.clone(),
            password: self.password.clone(),
            birthday: self.birthday()?,
        })
    }
}

/// Payload sent to the signup endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SignUpBody {
    pub email: String,
    pub lastname: String,
    pub firstname: String,
    pub password: String,
    pub birthday: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> SignUpDraft {
        SignUpDraft {
            email: "jane@example.com".into(),
            lastname: "Doe".into(),
            firstname: "Jane".into(),
            password: "correct-horse7".into(),
            birth_year: Some("1994".into()),
            birth_day: Some("7".into()),
            birth_month: Some("3 - March".into()),
        }
    }

    #[test]
    fn password_containing_lastname_or_email_is_rejected() {
        assert!(has_name_or_email_in_password("xxDoexx12", "Doe", "jane@example.com"));
        assert!(has_name_or_email_in_password("my-jane-pass1", "Doe", "jane@example.com"));
        assert!(!has_name_or_email_in_password("correct-horse7", "Doe", "jane@example.com"));
    }

    #[test]
    fn empty_password_or_lastname_counts_as_containing() {
        assert!(has_name_or_email_in_password("", "Doe", "jane@example.com"));
        assert!(has_name_or_email_in_password("correct-horse7", "", "jane@example.com"));
    }

    #[test]
    fn name_match_is_case_sensitive() {
        assert!(!has_name_or_email_in_password("hunter2", "Hunter", "x@y.z"));
        assert!(has_name_or_email_in_password("Hunter2", "Hunter", "x@y.z"));
    }

    #[test]
    fn email_without_at_uses_whole_address() {
        assert_eq!(email_local_part("jane"), "jane");
        assert_eq!(email_local_part("jane@example.com"), "jane");
        assert!(has_name_or_email_in_password("jane1234!", "Doe", "jane"));
    }

    #[test]
    fn min_length_boundary() {
        assert!(!meets_min_length("1234567"));
        assert!(meets_min_length("12345678"));
        assert!(meets_min_length("123456789"));
        // counted in characters, not bytes
        assert!(!meets_min_length("비밀번호비밀번"));
    }

    #[test]
    fn number_or_symbol() {
        assert!(!has_number_or_symbol("abc"));
        assert!(has_number_or_symbol("abc1"));
        assert!(has_number_or_symbol("abc!"));
        assert!(has_number_or_symbol("a\\b"));
        assert!(!has_number_or_symbol(""));
    }

    #[test]
    fn hunter2_is_invalid() {
        let draft = SignUpDraft {
            password: "hunter2".into(),
            lastname: "Hunter".into(),
            ..valid_draft()
        };
        assert!(!draft.is_valid());
    }

    #[test]
    fn complete_draft_is_valid() {
        assert!(valid_draft().is_valid());
    }

    #[test]
    fn any_missing_required_field_invalidates() {
        let cases: [fn(&mut SignUpDraft); 6] = [
            |d| d.email.clear(),
            |d| d.lastname.clear(),
            |d| d.firstname.clear(),
            |d| d.birth_month = None,
            |d| d.birth_day = None,
            |d| d.birth_year = None,
        ];
        for clear in cases {
            let mut draft = valid_draft();
            clear(&mut draft);
            assert!(!draft.is_valid(), "{draft:?}");
        }
    }

    #[test]
    fn birthday_strips_month_decoration() {
        let body = valid_draft().to_body().unwrap();
        assert_eq!(body.birthday, NaiveDate::from_ymd_opt(1994, 3, 7).unwrap());
        assert_eq!(numeric_month("12 - December"), "12");
    }

    #[test]
    fn impossible_birthday_is_none() {
        let draft = SignUpDraft {
            birth_month: Some("2 - February".into()),
            birth_day: Some("31".into()),
            ..valid_draft()
        };
        assert_eq!(draft.birthday(), None);
        assert!(draft.to_body().is_none());
    }
}
