use crate::server::{
    error::{auth::AuthError, AppError},
    model::player::RegisterPlayerParam,
    service::{auth::AuthService, token::TokenService},
};
use test_utils::{builder::TestBuilder, factory};


fn tokens() -> TokenService {
    TokenService::new(b"test-secret", 3600)
}

fn register_param(email: &str, nickname: &str) -> RegisterPlayerParam {
    RegisterPlayerParam {
        email: email.to_string(),
        nickname: nickname.to_string(),
        password: "Secret#123".to_string(),
        skin_url: None,
        profile_image_url: None,
    }
}
