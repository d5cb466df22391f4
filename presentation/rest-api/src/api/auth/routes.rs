use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};
use business::domain::auth::use_cases::send_code::{SendPhoneCodeParams, SendPhoneCodeUseCase};
use business::domain::auth::use_cases::sign_in::{SignInParams, SignInUseCase};
use business::domain::auth::use_cases::verify_code::{
    VerifyPhoneCodeParams, VerifyPhoneCodeUseCase,
};
use business::domain::shared::value_objects::Locale;

use crate::api::auth::dto::{
    AuthErrorResponse, RegisterRequest, SendCodeRequest, SessionResponse, SignInRequest,
    VerificationResponse, VerifyCodeRequest,
};
use crate::api::auth::error_mapper::into_auth_error_response;
use crate::api::error::parse_locale;
use crate::api::tags::ApiTags;

pub struct AuthApi {
    sign_in_use_case: Arc<dyn SignInUseCase>,
    register_use_case: Arc<dyn RegisterUseCase>,
    send_code_use_case: Arc<dyn SendPhoneCodeUseCase>,
    verify_code_use_case: Arc<dyn VerifyPhoneCodeUseCase>,
}

impl AuthApi {
    pub fn new(
        sign_in_use_case: Arc<dyn SignInUseCase>,
        register_use_case: Arc<dyn RegisterUseCase>,
        send_code_use_case: Arc<dyn SendPhoneCodeUseCase>,
        verify_code_use_case: Arc<dyn VerifyPhoneCodeUseCase>,
    ) -> Self {
        Self {
            sign_in_use_case,
            register_use_case,
            send_code_use_case,
            verify_code_use_case,
        }
    }

    fn invalid_locale() -> Json<AuthErrorResponse> {
        Json(AuthErrorResponse {
            name: "ValidationError".to_string(),
            code: "locale.unsupported".to_string(),
            message: "Unsupported locale tag".to_string(),
        })
    }
}

/// Auth API
///
/// Credential flows against the hosted identity provider. Provider
/// rejections come back with a stable code plus a message localized to the
/// requested locale.
#[OpenApi]
impl AuthApi {
    /// Sign in with email and password
    #[oai(path = "/auth/sign-in", method = "post", tag = "ApiTags::Auth")]
    async fn sign_in(
        &self,
        /// Locale tag for error messages, "en" (default) or "ar"
        lang: Query<Option<String>>,
        body: Json<SignInRequest>,
    ) -> AuthSessionResponse {
        let locale = match parse_locale(lang.0.as_deref()) {
            Ok(locale) => locale,
            Err(_) => return AuthSessionResponse::BadRequest(Self::invalid_locale()),
        };

        match self
            .sign_in_use_case
            .execute(SignInParams {
                email: body.0.email,
                password: body.0.password,
            })
            .await
        {
            Ok(session) => AuthSessionResponse::Ok(Json(session.into())),
            Err(err) => AuthSessionResponse::from_error(err, locale),
        }
    }

    /// Register a new account with email and password
    #[oai(path = "/auth/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(
        &self,
        /// Locale tag for error messages, "en" (default) or "ar"
        lang: Query<Option<String>>,
        body: Json<RegisterRequest>,
    ) -> AuthSessionResponse {
        let locale = match parse_locale(lang.0.as_deref()) {
            Ok(locale) => locale,
            Err(_) => return AuthSessionResponse::BadRequest(Self::invalid_locale()),
        };

        match self
            .register_use_case
            .execute(RegisterParams {
                email: body.0.email,
                password: body.0.password,
            })
            .await
        {
            Ok(session) => AuthSessionResponse::Ok(Json(session.into())),
            Err(err) => AuthSessionResponse::from_error(err, locale),
        }
    }

    /// Send a phone verification code
    ///
    /// Issues a challenge resumable via its `request_id` for a limited time.
    #[oai(path = "/auth/phone/send-code", method = "post", tag = "ApiTags::Auth")]
    async fn send_code(
        &self,
        /// Locale tag for error messages, "en" (default) or "ar"
        lang: Query<Option<String>>,
        body: Json<SendCodeRequest>,
    ) -> SendCodeResponse {
        let locale = match parse_locale(lang.0.as_deref()) {
            Ok(locale) => locale,
            Err(_) => return SendCodeResponse::BadRequest(Self::invalid_locale()),
        };

        match self
            .send_code_use_case
            .execute(SendPhoneCodeParams {
                phone_number: body.0.phone_number,
                recaptcha_token: body.0.recaptcha_token,
            })
            .await
        {
            Ok(verification) => SendCodeResponse::Ok(Json(verification.into())),
            Err(err) => {
                let (status, json) = into_auth_error_response(err, locale);
                match status.as_u16() {
                    400 => SendCodeResponse::BadRequest(json),
                    429 => SendCodeResponse::TooManyRequests(json),
                    _ => SendCodeResponse::InternalError(json),
                }
            }
        }
    }

    /// Verify a phone code and sign in
    #[oai(path = "/auth/phone/verify-code", method = "post", tag = "ApiTags::Auth")]
    async fn verify_code(
        &self,
        /// Locale tag for error messages, "en" (default) or "ar"
        lang: Query<Option<String>>,
        body: Json<VerifyCodeRequest>,
    ) -> AuthSessionResponse {
        let locale = match parse_locale(lang.0.as_deref()) {
            Ok(locale) => locale,
            Err(_) => return AuthSessionResponse::BadRequest(Self::invalid_locale()),
        };

        match self
            .verify_code_use_case
            .execute(VerifyPhoneCodeParams {
                request_id: body.0.request_id,
                code: body.0.code,
            })
            .await
        {
            Ok(session) => AuthSessionResponse::Ok(Json(session.into())),
            Err(err) => AuthSessionResponse::from_error(err, locale),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AuthSessionResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<AuthErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<AuthErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<AuthErrorResponse>),
    #[oai(status = 429)]
    TooManyRequests(Json<AuthErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<AuthErrorResponse>),
}

impl AuthSessionResponse {
    fn from_error(err: business::domain::auth::errors::IdentityError, locale: Locale) -> Self {
        let (status, json) = into_auth_error_response(err, locale);
        match status.as_u16() {
            400 => AuthSessionResponse::BadRequest(json),
            401 => AuthSessionResponse::Unauthorized(json),
            409 => AuthSessionResponse::Conflict(json),
            429 => AuthSessionResponse::TooManyRequests(json),
            _ => AuthSessionResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SendCodeResponse {
    #[oai(status = 200)]
    Ok(Json<VerificationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<AuthErrorResponse>),
    #[oai(status = 429)]
    TooManyRequests(Json<AuthErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<AuthErrorResponse>),
}
