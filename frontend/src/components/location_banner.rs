use leptos::prelude::*;

use super::icons::{AlertCircle, Check};
use crate::web::geolocation::LocationStatus;

/// 定位状态横幅
///
/// 失败状态常驻显示并带手动重试按钮，每次点击只重新发起一次定位。
#[component]
pub fn LocationBanner(
    #[prop(into)] status: Signal<LocationStatus>,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    let banner_class = move || {
        let tone = match status.get() {
            LocationStatus::Loading => "bg-blue-50 text-blue-700",
            LocationStatus::Ready(_) => "bg-green-50 text-green-700",
            LocationStatus::Failed(_) => "bg-red-50 text-red-700",
        };
        format!("mb-6 p-4 rounded-lg flex items-center {tone}")
    };

    let text = move || match status.get() {
        LocationStatus::Loading => "သင့်ရဲ့နေရပ် ရယူနေသည်....".to_string(),
        LocationStatus::Ready(c) => {
            format!("Latitude: {:.6}, Longitude: {:.6}", c.latitude, c.longitude)
        }
        LocationStatus::Failed(message) => message,
    };

    view! {
        <div class=banner_class>
            <div class="mr-3">
                {move || match status.get() {
                    LocationStatus::Loading => view! {
                        <div class="animate-spin rounded-full h-5 w-5 border-b-2 border-current"></div>
                    }
                        .into_any(),
                    LocationStatus::Ready(_) => view! { <Check attr:class="h-5 w-5" /> }.into_any(),
                    LocationStatus::Failed(_) => {
                        view! { <AlertCircle attr:class="h-5 w-5" /> }.into_any()
                    }
                }}
            </div>
            <p class="text-sm">{text}</p>
            <Show when=move || status.get().is_failed()>
                <button
                    on:click=move |_| on_retry.run(())
                    class="ml-auto text-xs bg-red-100 hover:bg-red-200 text-red-800 px-2 py-1 rounded"
                >
                    "ပြန်လည်ကြိုးစားရန်"
                </button>
            </Show>
        </div>
    }
}
