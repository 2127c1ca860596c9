//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 求助表单
    GetHelp,
    /// 求助列表
    HelpList,
    /// 求助详情，携带记录 id（原样取自 URL，不透明）
    HelpDetail(String),
    /// 援助提供者列表 (需要认证)
    Suppliers,
    /// 登记援助提供者 (需要认证)
    AddSupplier,
    /// 情况通报列表
    Blog,
    /// 情况通报详情
    BlogDetail(String),
    /// 发布情况通报 (需要认证)
    BlogCreate,
    /// 编辑情况通报 (需要认证)
    BlogEdit(String),
    /// 登录页面
    Login,
    /// 关于页面
    About,
    /// 联系方式页面
    Contact,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["get-help"] => Self::GetHelp,
            ["help-list"] => Self::HelpList,
            ["help", id] => Self::HelpDetail((*id).to_string()),
            ["suppliers"] => Self::Suppliers,
            ["add-supplier"] => Self::AddSupplier,
            ["blog"] => Self::Blog,
            ["blog", "create"] => Self::BlogCreate,
            ["blog", id] => Self::BlogDetail((*id).to_string()),
            ["blog", id, "edit"] => Self::BlogEdit((*id).to_string()),
            ["login"] => Self::Login,
            ["about"] => Self::About,
            ["contact"] => Self::Contact,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::GetHelp => "/get-help".to_string(),
            Self::HelpList => "/help-list".to_string(),
            Self::HelpDetail(id) => format!("/help/{id}"),
            Self::Suppliers => "/suppliers".to_string(),
            Self::AddSupplier => "/add-supplier".to_string(),
            Self::Blog => "/blog".to_string(),
            Self::BlogDetail(id) => format!("/blog/{id}"),
            Self::BlogCreate => "/blog/create".to_string(),
            Self::BlogEdit(id) => format!("/blog/{id}/edit"),
            Self::Login => "/login".to_string(),
            Self::About => "/about".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Suppliers | Self::AddSupplier | Self::BlogCreate | Self::BlogEdit(_)
        )
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Suppliers
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests;
