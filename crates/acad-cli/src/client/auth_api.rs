use crate::{Client, ClientResult};

use acad_core::User;

use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

impl Client {
    // =========================================================================
    // Auth & Users
    // =========================================================================

    /// Exchange credentials for a bearer token
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        let req = self.request(Method::POST, "/auth/login").json(&body);
        self.execute_as(req, "data").await
    }

    /// The user the current token belongs to
    pub async fn current_user(&self) -> ClientResult<User> {
        let req = self.request(Method::GET, "/auth/me");
        self.execute_as(req, "user").await
    }

    /// List all staff users
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        let req = self.request(Method::GET, "/users");
        self.execute_as(req, "users").await
    }

    /// List users working on admissions (lead assignees)
    pub async fn list_admission_users(&self) -> ClientResult<Vec<User>> {
        let req = self.request(Method::GET, "/users/admission");
        self.execute_as(req, "users").await
    }
}
