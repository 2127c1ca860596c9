//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! token 持久化在 LocalStorage 的唯一槽位里；认证与否就是
//! "槽位里有没有 token"——客户端不校验过期或签名。
//! 路由服务通过注入的认证信号来检查认证状态。

use crate::api::{ApiClient, ApiError};
use crate::web::LocalStorage;
use leptos::prelude::*;
use myansafe_shared::{BEARER_PREFIX, HEADER_AUTHORIZATION, LoginRequest, LoginResponse};

const STORAGE_TOKEN_KEY: &str = "myansafe_auth_token";

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
/// 写入只发生在 login / logout 两处。
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: ReadSignal<bool>,
    set_state: WriteSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(false);
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        self.state.into()
    }

    fn set_authenticated(&self, value: bool) {
        self.set_state.set(value);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态：启动时读一次存储槽位
pub fn init_auth(ctx: &AuthContext) {
    ctx.set_authenticated(token().is_some());
}

/// 当前存储的 token
pub fn token() -> Option<String> {
    LocalStorage::get(STORAGE_TOKEN_KEY)
}

/// 出站请求要附带的认证头；没有 token 时为空
pub fn auth_header() -> Option<(&'static str, String)> {
    token().map(|t| (HEADER_AUTHORIZATION, format_bearer(&t)))
}

fn format_bearer(token: &str) -> String {
    format!("{BEARER_PREFIX}{token}")
}

/// 登录并持久化 token
///
/// 成功后存储返回的 access token、翻转认证信号并返回完整响应；
/// 失败时优先透出后端附带的说明文本。
pub async fn login(
    ctx: AuthContext,
    username: String,
    password: String,
) -> Result<LoginResponse, String> {
    let api = ApiClient::new();
    match api.login(&LoginRequest { username, password }).await {
        Ok(response) => {
            LocalStorage::set(STORAGE_TOKEN_KEY, &response.access);
            ctx.set_authenticated(true);
            Ok(response)
        }
        Err(err) => {
            web_sys::console::error_1(&format!("Login error: {err}").into());
            let message = match &err {
                ApiError::Http {
                    message: Some(m), ..
                } => m.clone(),
                _ => "Login failed. Please try again.".to_string(),
            };
            Err(message)
        }
    }
}

/// 注销并清除 token
///
/// 无条件清空槽位；不需要手动导航，
/// 路由服务会监听认证状态变化并自动重定向。
pub fn logout(ctx: AuthContext) {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
    ctx.set_authenticated(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_format() {
        assert_eq!(format_bearer("abc.def"), "Bearer abc.def");
    }
}
