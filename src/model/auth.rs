use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub email: String,
    pub nickname: String,
    pub password: String,
    #[serde(default)]
    pub skin_url: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TokenDto {
    pub token: String,
    pub email: String,
    pub nickname: String,
}
