//! REST 客户端模块
//!
//! 对后端的每条路由提供一个类型化方法。所有出站请求在 token 存在时
//! 附带 `Authorization: Bearer` 头；没有 token 时照常发出，由后端
//! 决定该路由是否受限。不重试、不超时、不缓存：每次调用一发即止。

use crate::auth;
use gloo_net::http::{Request, RequestBuilder, Response};
use myansafe_shared::{
    BlogPost, BlogPostsResponse, CategoriesResponse, CitiesResponse, CommentCreated,
    CommentsResponse, CreateSupplierPayload, ErrorBody, HelpDetailResponse, HelpListResponse,
    LoginRequest, LoginResponse, SubmitCommentPayload, SubmitHelpPayload, SuppliersResponse,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// 后端基地址在构建期注入；未设置时退回同源相对路径
const API_BASE_URL: &str = match option_env!("MYANSAFE_API_URL") {
    Some(url) => url,
    None => "",
};

/// HTTP 错误类型
///
/// 非 2xx 响应保留数字状态码供调用方判断；后端附带的
/// `{"message": …}` 说明文本（登录失败时会用到）也一并捕获。
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 网络层失败（请求没有到达或没有响应）
    Network(String),
    /// 服务端返回非 2xx
    Http {
        status: u16,
        message: Option<String>,
    },
    /// 响应体解析失败
    Decode(String),
}

impl ApiError {
    /// 数字状态码，仅 Http 变体携带
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 后端附带的说明文本
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http {
                message: Some(m), ..
            } => Some(m),
            _ => None,
        }
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Http { status, message } => match message {
                Some(m) => write!(f, "HTTP {status}: {m}"),
                None => write!(f, "HTTP {status}"),
            },
            ApiError::Decode(msg) => write!(f, "response parse failed: {msg}"),
        }
    }
}

/// REST 客户端
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 分页列表地址：有不透明页引用时原样使用，客户端绝不自行拼分页参数
    fn page_url(&self, default_path: &str, page: Option<&str>) -> String {
        match page {
            Some(reference) => reference.to_string(),
            None => self.url(default_path),
        }
    }

    /// token 存在时附带认证头
    fn with_auth(builder: RequestBuilder) -> RequestBuilder {
        match auth::auth_header() {
            Some((key, value)) => builder.header(key, &value),
            None => builder,
        }
    }

    /// 把非 2xx 响应转成错误，尽量捞出后端的说明文本
    async fn into_error(res: Response) -> ApiError {
        let status = res.status();
        let message = res.json::<ErrorBody>().await.ok().map(|b| b.message);
        ApiError::Http { status, message }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let res = Self::with_auth(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(Self::into_error(res).await);
        }

        res.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: String,
        body: &B,
    ) -> Result<T, ApiError> {
        let res = Self::with_auth(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(Self::into_error(res).await);
        }

        res.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 只关心成功状态、不消费响应体的 POST
    async fn post_json_unit<B: Serialize>(&self, url: String, body: &B) -> Result<(), ApiError> {
        let res = Self::with_auth(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(Self::into_error(res).await);
        }
        Ok(())
    }

    /// multipart 表单提交（博客写操作）。不手动设 Content-Type，
    /// 浏览器会连同 boundary 一起生成。
    async fn send_form(
        &self,
        builder: RequestBuilder,
        form: web_sys::FormData,
    ) -> Result<(), ApiError> {
        let res = Self::with_auth(builder)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(Self::into_error(res).await);
        }
        Ok(())
    }

    // =========================================================
    // 求助 (Help Requests)
    // =========================================================

    /// 提交求助
    pub async fn submit_help_request(&self, payload: &SubmitHelpPayload) -> Result<(), ApiError> {
        self.post_json_unit(self.url("/help"), payload).await
    }

    /// 求助列表（服务端按分类分好组）
    pub async fn fetch_help_list(&self, page: Option<&str>) -> Result<HelpListResponse, ApiError> {
        self.get_json(self.page_url("/helplist", page)).await
    }

    /// 单条求助详情
    pub async fn fetch_help_by_id(&self, id: &str) -> Result<HelpDetailResponse, ApiError> {
        self.get_json(self.url(&format!("/helps/{id}"))).await
    }

    // =========================================================
    // 留言 (Comments)
    // =========================================================

    pub async fn fetch_comments(&self, help_id: &str) -> Result<CommentsResponse, ApiError> {
        self.get_json(self.url(&format!("/helps/{help_id}/comments")))
            .await
    }

    pub async fn submit_comment(
        &self,
        help_id: &str,
        text: String,
    ) -> Result<CommentCreated, ApiError> {
        self.post_json(
            self.url(&format!("/helps/{help_id}/submitComments")),
            &SubmitCommentPayload { text },
        )
        .await
    }

    // =========================================================
    // 援助提供者 (Suppliers)
    // =========================================================

    pub async fn fetch_suppliers(&self, page: Option<&str>) -> Result<SuppliersResponse, ApiError> {
        self.get_json(self.page_url("/generalsuppliers", page)).await
    }

    pub async fn create_supplier(&self, payload: &CreateSupplierPayload) -> Result<(), ApiError> {
        self.post_json_unit(self.url("/help"), payload).await
    }

    // =========================================================
    // 参照数据 (Reference Data)
    // =========================================================

    pub async fn fetch_cities(&self) -> Result<CitiesResponse, ApiError> {
        self.get_json(self.url("/cities")).await
    }

    pub async fn fetch_categories(&self) -> Result<CategoriesResponse, ApiError> {
        self.get_json(self.url("/categories")).await
    }

    // =========================================================
    // 认证 (Auth)
    // =========================================================

    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json(self.url("/login"), payload).await
    }

    // =========================================================
    // 情况通报 (Blog)
    // =========================================================

    pub async fn fetch_blog_posts(&self) -> Result<BlogPostsResponse, ApiError> {
        self.get_json(self.url("/blog")).await
    }

    pub async fn fetch_blog_post(&self, id: &str) -> Result<BlogPost, ApiError> {
        self.get_json(self.url(&format!("/blog/{id}"))).await
    }

    pub async fn create_blog_post(&self, form: web_sys::FormData) -> Result<(), ApiError> {
        self.send_form(Request::post(&self.url("/blog")), form).await
    }

    pub async fn update_blog_post(
        &self,
        id: &str,
        form: web_sys::FormData,
    ) -> Result<(), ApiError> {
        self.send_form(Request::put(&self.url(&format!("/blog/{id}"))), form)
            .await
    }

    pub async fn delete_blog_post(&self, id: &str) -> Result<(), ApiError> {
        let res = Self::with_auth(Request::delete(&self.url(&format!("/blog/{id}"))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(Self::into_error(res).await);
        }
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let api = ApiClient::with_base_url("https://api.myansafe.example/");
        assert_eq!(api.url("/help"), "https://api.myansafe.example/help");
        assert_eq!(api.url("cities"), "https://api.myansafe.example/cities");
    }

    #[test]
    fn test_page_url_uses_opaque_reference_verbatim() {
        let api = ApiClient::with_base_url("https://api.myansafe.example");

        // 没有页引用时走默认列表路径
        assert_eq!(
            api.page_url("/helplist", None),
            "https://api.myansafe.example/helplist"
        );

        // 有页引用时逐字使用，哪怕它指向别的主机
        let opaque = "https://api.myansafe.example/helplist?cursor=abc123";
        assert_eq!(api.page_url("/helplist", Some(opaque)), opaque);
    }

    #[test]
    fn test_error_status_is_discoverable() {
        let err = ApiError::Http {
            status: 503,
            message: None,
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(ApiError::Network("down".to_string()).status(), None);
    }

    #[test]
    fn test_error_display_includes_server_message() {
        let err = ApiError::Http {
            status: 401,
            message: Some("invalid credentials".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 401: invalid credentials");
        assert_eq!(err.server_message(), Some("invalid credentials"));
    }
}
