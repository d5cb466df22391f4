use std::sync::Arc;

use logger::TracingLogger;

use firebase::client::FirebaseAuthClient;
use firebase::identity::IdentityProviderFirebase;
use gemini::client::GeminiClient;
use gemini::suggestion_generator::SuggestionGeneratorGemini;
use persistence::barber::repository::BarberRepositoryPostgres;
use persistence::promotion::repository::PromotionRepositoryPostgres;

use business::application::appointment::get_all::GetAppointmentsUseCaseImpl;
use business::application::auth::register::RegisterUseCaseImpl;
use business::application::auth::send_code::SendPhoneCodeUseCaseImpl;
use business::application::auth::session_store::VerificationSessionStore;
use business::application::auth::sign_in::SignInUseCaseImpl;
use business::application::auth::verify_code::VerifyPhoneCodeUseCaseImpl;
use business::application::barber::get_all::GetBarbersUseCaseImpl;
use business::application::promotion::get_all::GetPromotionsUseCaseImpl;
use business::application::review::get_all::GetReviewsUseCaseImpl;
use business::application::service::get_all::GetServicesUseCaseImpl;
use business::application::suggestion::suggest::SuggestComplementsUseCaseImpl;

use crate::config::firebase_config::FirebaseConfig;
use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub barber_api: crate::api::barber::routes::BarberApi,
    pub promotion_api: crate::api::promotion::routes::PromotionApi,
    pub service_api: crate::api::service::routes::ServiceApi,
    pub review_api: crate::api::review::routes::ReviewApi,
    pub appointment_api: crate::api::appointment::routes::AppointmentApi,
    pub suggestion_api: crate::api::suggestion::routes::SuggestionApi,
    pub auth_api: crate::api::auth::routes::AuthApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let barber_repository = Arc::new(BarberRepositoryPostgres::new(pool.clone()));
        let promotion_repository = Arc::new(PromotionRepositoryPostgres::new(pool));

        let gemini_config = GeminiConfig::from_env();
        let gemini_client = GeminiClient::new(gemini_config.api_key, gemini_config.model);
        let suggestion_generator = Arc::new(SuggestionGeneratorGemini::new(gemini_client));

        let firebase_config = FirebaseConfig::from_env();
        let firebase_client = FirebaseAuthClient::new(firebase_config.api_key);
        let identity_provider = Arc::new(IdentityProviderFirebase::new(firebase_client));

        // Content use cases
        let get_barbers_use_case = Arc::new(GetBarbersUseCaseImpl {
            repository: barber_repository,
            logger: logger.clone(),
        });
        let get_promotions_use_case = Arc::new(GetPromotionsUseCaseImpl {
            repository: promotion_repository,
            logger: logger.clone(),
        });
        let get_services_use_case = Arc::new(GetServicesUseCaseImpl {
            logger: logger.clone(),
        });
        let get_reviews_use_case = Arc::new(GetReviewsUseCaseImpl {
            logger: logger.clone(),
        });
        let get_appointments_use_case = Arc::new(GetAppointmentsUseCaseImpl {
            logger: logger.clone(),
        });

        // Suggestion use case
        let suggest_use_case = Arc::new(SuggestComplementsUseCaseImpl::new(
            suggestion_generator,
            logger.clone(),
        ));

        // Auth use cases share one verification-session store
        let verification_sessions = Arc::new(VerificationSessionStore::new());
        let sign_in_use_case = Arc::new(SignInUseCaseImpl {
            provider: identity_provider.clone(),
            logger: logger.clone(),
        });
        let register_use_case = Arc::new(RegisterUseCaseImpl {
            provider: identity_provider.clone(),
            logger: logger.clone(),
        });
        let send_code_use_case = Arc::new(SendPhoneCodeUseCaseImpl {
            provider: identity_provider.clone(),
            sessions: verification_sessions.clone(),
            logger: logger.clone(),
        });
        let verify_code_use_case = Arc::new(VerifyPhoneCodeUseCaseImpl {
            provider: identity_provider,
            sessions: verification_sessions,
            logger,
        });

        let barber_api = crate::api::barber::routes::BarberApi::new(get_barbers_use_case);
        let promotion_api =
            crate::api::promotion::routes::PromotionApi::new(get_promotions_use_case);
        let service_api = crate::api::service::routes::ServiceApi::new(get_services_use_case);
        let review_api = crate::api::review::routes::ReviewApi::new(get_reviews_use_case);
        let appointment_api =
            crate::api::appointment::routes::AppointmentApi::new(get_appointments_use_case);
        let suggestion_api = crate::api::suggestion::routes::SuggestionApi::new(suggest_use_case);
        let auth_api = crate::api::auth::routes::AuthApi::new(
            sign_in_use_case,
            register_use_case,
            send_code_use_case,
            verify_code_use_case,
        );

        Ok(Self {
            health_api,
            barber_api,
            promotion_api,
            service_api,
            review_api,
            appointment_api,
            suggestion_api,
            auth_api,
        })
    }
}
