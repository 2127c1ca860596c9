use leptos::prelude::*;

/// 首页/关于/联系/登录页共用的标题横幅
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="text-center mb-8">
            <h1 class="text-3xl font-bold text-blue-800">"Myan Safe"</h1>
            <p class="text-gray-600 mt-2">"အရေးပေါ် ကူညီ ကယ်ဆယ်ရေး"</p>
        </header>
    }
}
