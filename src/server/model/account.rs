/// Credentials submitted to sign in.
pub struct SignInParams {
    pub username: String,
    /// Plaintext password, digested before it reaches the store
    pub password: String,
}
