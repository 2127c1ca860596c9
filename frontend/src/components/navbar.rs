use leptos::prelude::*;

use crate::auth::{logout, use_auth};
use crate::web::router::Link;

/// 顶部导航条，常驻在所有路由之上
#[component]
pub fn NavBar() -> impl IntoView {
    let auth_ctx = use_auth();
    let is_authenticated = auth_ctx.is_authenticated_signal();

    // 登出后的重定向由路由服务的认证状态监听处理
    let on_logout = move |_| logout(auth_ctx);

    view! {
        <nav class="bg-blue-500 p-4 text-white shadow-lg">
            <div class="container mx-auto flex justify-between items-center">
                <Link to="/" attr:class="text-xl font-bold">
                    "Myan Safe"
                </Link>
                <ul class="flex flex-wrap items-center space-x-4">
                    <li>
                        <Link to="/" attr:class="hover:underline">"Home"</Link>
                    </li>
                    <li>
                        <Link to="/get-help" attr:class="hover:underline">"Get Help"</Link>
                    </li>
                    <li>
                        <Link to="/help-list" attr:class="hover:underline">"Help Lists"</Link>
                    </li>
                    <li>
                        <Link to="/blog" attr:class="hover:underline">"Updates"</Link>
                    </li>
                    <li>
                        <Link to="/about" attr:class="hover:underline">"About"</Link>
                    </li>
                    <li>
                        <Link to="/contact" attr:class="hover:underline">"Contact"</Link>
                    </li>
                    <Show
                        when=move || is_authenticated.get()
                        fallback=|| {
                            view! {
                                <li>
                                    <Link to="/login" attr:class="hover:underline">"Login"</Link>
                                </li>
                            }
                        }
                    >
                        <li>
                            <Link to="/suppliers" attr:class="hover:underline">"Suppliers"</Link>
                        </li>
                        <li>
                            <button on:click=on_logout class="hover:underline">
                                "Logout"
                            </button>
                        </li>
                    </Show>
                </ul>
            </div>
        </nav>
    }
}
