/// Bearer token minted by a successful login.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
}
