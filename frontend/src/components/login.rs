use leptos::prelude::*;
use leptos::task::spawn_local;

use super::header::Header;
use crate::auth::{login, use_auth};
use myansafe_shared::validate::validate_login_fields;

/// 登录页
///
/// 登录失败优先展示后端附带的说明文本；成功后的跳转由
/// 路由服务监听认证信号完成，已认证访客也会被自动转走。
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_ctx = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let user = username.get();
        let pass = password.get();
        if validate_login_fields(&user, &pass).is_err() {
            set_error_msg.set(Some("Username and password are required".to_string()));
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            if let Err(message) = login(auth_ctx, user, pass).await {
                let _ = set_error_msg.try_set(Some(message));
            }
            let _ = set_is_submitting.try_set(false);
        });
    };

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-100 py-12 px-6 space-y-6">
            <Header />
            <div class="bg-white shadow-xl rounded-2xl p-8 w-full max-w-md space-y-6">
                <h2 class="text-center text-3xl font-bold text-gray-900">"Sign in"</h2>

                <Show when=move || error_msg.get().is_some()>
                    <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded-md">
                        {move || error_msg.get().unwrap_or_default()}
                    </div>
                </Show>

                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label class="block text-sm font-medium text-gray-700" for="username">
                            "Username"
                        </label>
                        <input
                            id="username"
                            type="text"
                            placeholder="Enter your username"
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            prop:value=username
                            class="mt-1 block w-full p-3 border border-gray-300 rounded-lg shadow-sm focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700" for="password">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Enter your password"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            class="mt-1 block w-full p-3 border border-gray-300 rounded-lg shadow-sm focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || is_submitting.get()
                        class="w-full py-3 text-white bg-blue-600 rounded-lg font-medium hover:bg-blue-700 transition disabled:opacity-50 flex items-center justify-center"
                    >
                        {move || if is_submitting.get() {
                            view! {
                                <div class="animate-spin rounded-full h-5 w-5 border-b-2 border-white mr-3"></div>
                                "Signing in..."
                            }
                                .into_any()
                        } else {
                            "Sign in".into_any()
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
