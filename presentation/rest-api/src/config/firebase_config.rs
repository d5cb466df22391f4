/// Configuration for the hosted identity provider.
pub struct FirebaseConfig {
    pub api_key: String,
}

impl FirebaseConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("FIREBASE_WEB_API_KEY")
                .expect("FIREBASE_WEB_API_KEY must be set"),
        }
    }
}
