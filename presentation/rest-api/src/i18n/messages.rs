use business::domain::auth::errors::IdentityError;
use business::domain::shared::value_objects::Locale;

/// One field per user-facing string. A struct (rather than a map) makes a
/// missing key a compile error instead of a runtime fallback case.
pub struct Messages {
    /// Warning banner when the remote store could not be reached.
    pub remote_unavailable_warning: &'static str,
    /// Informational note when the list shown is the static catalog.
    pub sample_data_note: &'static str,
    pub auth_user_not_found: &'static str,
    pub auth_wrong_password: &'static str,
    pub auth_email_in_use: &'static str,
    pub auth_invalid_email: &'static str,
    pub auth_weak_password: &'static str,
    pub auth_invalid_phone: &'static str,
    pub auth_invalid_code: &'static str,
    pub auth_code_expired: &'static str,
    pub auth_too_many_attempts: &'static str,
    pub auth_provider_unreachable: &'static str,
    /// Template for unmapped provider codes; "{code}" is substituted with
    /// the raw code for diagnosis.
    pub auth_unknown_template: &'static str,
}

pub const EN: Messages = Messages {
    remote_unavailable_warning: "We could not reach our servers, so you are seeing sample data.",
    sample_data_note: "Showing sample data.",
    auth_user_not_found: "No account found for this email.",
    auth_wrong_password: "The email or password is incorrect.",
    auth_email_in_use: "An account with this email already exists.",
    auth_invalid_email: "Please enter a valid email address.",
    auth_weak_password: "The password must be at least 6 characters.",
    auth_invalid_phone: "Please enter a valid phone number, e.g. +966501234567.",
    auth_invalid_code: "The verification code is incorrect.",
    auth_code_expired: "The verification code has expired. Please request a new one.",
    auth_too_many_attempts: "Too many attempts. Please try again later.",
    auth_provider_unreachable: "We could not reach the sign-in service. Please try again.",
    auth_unknown_template: "An error occurred ({code}). Please try again.",
};

pub const AR: Messages = Messages {
    remote_unavailable_warning: "تعذر الوصول إلى خوادمنا، لذا تشاهد بيانات تجريبية.",
    sample_data_note: "يتم عرض بيانات تجريبية.",
    auth_user_not_found: "لا يوجد حساب مسجل بهذا البريد الإلكتروني.",
    auth_wrong_password: "البريد الإلكتروني أو كلمة المرور غير صحيحة.",
    auth_email_in_use: "يوجد حساب مسجل بهذا البريد الإلكتروني بالفعل.",
    auth_invalid_email: "يرجى إدخال بريد إلكتروني صحيح.",
    auth_weak_password: "يجب أن تتكون كلمة المرور من 6 أحرف على الأقل.",
    auth_invalid_phone: "يرجى إدخال رقم هاتف صحيح، مثال: ‎+966501234567.",
    auth_invalid_code: "رمز التحقق غير صحيح.",
    auth_code_expired: "انتهت صلاحية رمز التحقق. يرجى طلب رمز جديد.",
    auth_too_many_attempts: "محاولات كثيرة جداً. يرجى المحاولة لاحقاً.",
    auth_provider_unreachable: "تعذر الوصول إلى خدمة تسجيل الدخول. يرجى المحاولة مرة أخرى.",
    auth_unknown_template: "حدث خطأ ({code}). يرجى المحاولة مرة أخرى.",
};

pub fn messages(locale: Locale) -> &'static Messages {
    match locale {
        Locale::En => &EN,
        Locale::Ar => &AR,
    }
}

/// Renders a credential failure as a locale-appropriate message. Unmapped
/// provider codes fall through to the generic message with the raw code
/// substituted in.
pub fn credential_message(locale: Locale, error: &IdentityError) -> String {
    let m = messages(locale);
    match error {
        IdentityError::UserNotFound => m.auth_user_not_found.to_string(),
        IdentityError::WrongPassword => m.auth_wrong_password.to_string(),
        IdentityError::EmailInUse => m.auth_email_in_use.to_string(),
        IdentityError::InvalidEmail => m.auth_invalid_email.to_string(),
        IdentityError::WeakPassword => m.auth_weak_password.to_string(),
        IdentityError::InvalidPhoneNumber => m.auth_invalid_phone.to_string(),
        IdentityError::InvalidVerificationCode => m.auth_invalid_code.to_string(),
        IdentityError::VerificationExpired => m.auth_code_expired.to_string(),
        IdentityError::TooManyAttempts => m.auth_too_many_attempts.to_string(),
        IdentityError::ProviderUnreachable => m.auth_provider_unreachable.to_string(),
        IdentityError::Unknown(code) => m.auth_unknown_template.replace("{code}", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(m: &Messages) -> [(&'static str, &'static str); 13] {
        [
            ("remote_unavailable_warning", m.remote_unavailable_warning),
            ("sample_data_note", m.sample_data_note),
            ("auth_user_not_found", m.auth_user_not_found),
            ("auth_wrong_password", m.auth_wrong_password),
            ("auth_email_in_use", m.auth_email_in_use),
            ("auth_invalid_email", m.auth_invalid_email),
            ("auth_weak_password", m.auth_weak_password),
            ("auth_invalid_phone", m.auth_invalid_phone),
            ("auth_invalid_code", m.auth_invalid_code),
            ("auth_code_expired", m.auth_code_expired),
            ("auth_too_many_attempts", m.auth_too_many_attempts),
            ("auth_provider_unreachable", m.auth_provider_unreachable),
            ("auth_unknown_template", m.auth_unknown_template),
        ]
    }

    #[test]
    fn every_key_resolves_to_a_non_empty_string_in_both_locales() {
        for locale in Locale::ALL {
            for (key, value) in fields(messages(locale)) {
                assert!(
                    !value.trim().is_empty(),
                    "{} is empty for locale {}",
                    key,
                    locale
                );
            }
        }
    }

    #[test]
    fn unknown_template_carries_the_code_placeholder_in_both_locales() {
        for locale in Locale::ALL {
            assert!(messages(locale).auth_unknown_template.contains("{code}"));
        }
    }

    #[test]
    fn should_localize_every_credential_error() {
        let errors = [
            IdentityError::UserNotFound,
            IdentityError::WrongPassword,
            IdentityError::EmailInUse,
            IdentityError::InvalidEmail,
            IdentityError::WeakPassword,
            IdentityError::InvalidPhoneNumber,
            IdentityError::InvalidVerificationCode,
            IdentityError::VerificationExpired,
            IdentityError::TooManyAttempts,
            IdentityError::ProviderUnreachable,
        ];

        for locale in Locale::ALL {
            for error in &errors {
                assert!(!credential_message(locale, error).is_empty());
            }
        }
    }

    #[test]
    fn should_embed_the_raw_code_for_unknown_failures() {
        let message = credential_message(
            Locale::En,
            &IdentityError::Unknown("OPERATION_NOT_ALLOWED".to_string()),
        );

        assert!(message.contains("OPERATION_NOT_ALLOWED"));
        assert!(!message.contains("{code}"));
    }
}
