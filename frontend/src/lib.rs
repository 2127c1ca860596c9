//! Myan Safe 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎，含认证守卫）
//! - `auth`: 认证状态管理（token 持久化在 LocalStorage）
//! - `api`: REST 客户端
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod about;
    pub mod add_supplier;
    pub mod blog;
    pub mod blog_detail;
    pub mod blog_form;
    pub mod contact;
    pub mod get_help;
    mod header;
    pub mod help_detail;
    pub mod help_list;
    pub mod home;
    mod icons;
    mod location_banner;
    mod location_form;
    pub mod login;
    pub mod navbar;
    mod pagination;
    pub mod suppliers;
}

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，
// 所有对 window.history / localStorage / geolocation 的操作都集中在此。
pub(crate) mod web {
    pub mod geolocation;
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::about::AboutPage;
use crate::components::add_supplier::AddSupplierPage;
use crate::components::blog::BlogPage;
use crate::components::blog_detail::BlogDetailPage;
use crate::components::blog_form::BlogFormPage;
use crate::components::contact::ContactPage;
use crate::components::get_help::GetHelpPage;
use crate::components::help_detail::HelpDetailPage;
use crate::components::help_list::HelpListPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::navbar::NavBar;
use crate::components::suppliers::SuppliersPage;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::GetHelp => view! { <GetHelpPage /> }.into_any(),
        AppRoute::HelpList => view! { <HelpListPage /> }.into_any(),
        AppRoute::HelpDetail(id) => view! { <HelpDetailPage id=id /> }.into_any(),
        AppRoute::Suppliers => view! { <SuppliersPage /> }.into_any(),
        AppRoute::AddSupplier => view! { <AddSupplierPage /> }.into_any(),
        AppRoute::Blog => view! { <BlogPage /> }.into_any(),
        AppRoute::BlogDetail(id) => view! { <BlogDetailPage id=id /> }.into_any(),
        AppRoute::BlogCreate => view! { <BlogFormPage post_id=None /> }.into_any(),
        AppRoute::BlogEdit(id) => view! { <BlogFormPage post_id=Some(id) /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        AppRoute::Contact => view! { <ContactPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="text-center py-16">
                <h1 class="text-6xl font-bold text-red-600">"404"</h1>
                <p class="text-xl mt-4 text-gray-600">"Page not found"</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文并从 LocalStorage 恢复 token 状态
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 2. 获取认证状态信号，注入路由服务实现守卫（解耦）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 顶层兜底：渲染期逃逸的错误在这里被接住，并给出一个重置入口
        <ErrorBoundary fallback=|errors| {
            let error_list = errors.clone();
            let reset = errors.clone();
            view! {
                <div class="bg-red-100 border border-red-400 text-red-700 p-4 rounded-lg m-4">
                    <h2 class="text-lg font-bold mb-2">"Something went wrong!"</h2>
                    <ul class="mb-2 text-sm">
                        {move || {
                            error_list
                                .get()
                                .into_iter()
                                .map(|(_, err)| view! { <li>{err.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <button
                        class="bg-red-500 hover:bg-red-700 text-white font-bold py-2 px-4 rounded"
                        on:click=move |_| reset.set(Default::default())
                    >
                        "Try again"
                    </button>
                </div>
            }
        }>
            <Router is_authenticated=is_authenticated>
                <NavBar />
                <div class="container mx-auto px-4 py-8 max-w-4xl">
                    <RouterOutlet matcher=route_matcher />
                </div>
            </Router>
        </ErrorBoundary>
    }
}
