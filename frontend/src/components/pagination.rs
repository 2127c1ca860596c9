use leptos::prelude::*;

/// 分页控件
///
/// Previous/Next 只把服务端给出的不透明页引用逐字交还给调用方，
/// 从不自行构造分页参数。
#[component]
pub fn Pagination(
    #[prop(into)] count: Signal<u64>,
    #[prop(into)] next: Signal<Option<String>>,
    #[prop(into)] previous: Signal<Option<String>>,
    #[prop(into)] on_page_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center mt-6">
            <div class="text-sm text-gray-600">
                "Showing " {move || count.get()} " items"
            </div>

            <div class="flex space-x-2">
                <Show when=move || previous.get().is_some()>
                    <button
                        on:click=move |_| {
                            if let Some(reference) = previous.get() {
                                on_page_change.run(reference);
                            }
                        }
                        class="px-4 py-2 bg-gray-100 hover:bg-gray-200 text-gray-800 rounded-md transition"
                    >
                        "Previous"
                    </button>
                </Show>

                <Show when=move || next.get().is_some()>
                    <button
                        on:click=move |_| {
                            if let Some(reference) = next.get() {
                                on_page_change.run(reference);
                            }
                        }
                        class="px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white rounded-md transition"
                    >
                        "Next"
                    </button>
                </Show>
            </div>
        </div>
    }
}
