use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::Eye;
use super::pagination::Pagination;
use crate::api::ApiClient;
use crate::web::router::Link;
use myansafe_shared::HelpListResponse;

/// 求助列表页：服务端已按分类分组，这里只负责渲染与翻页
#[component]
pub fn HelpListPage() -> impl IntoView {
    let (help_data, set_help_data) = signal(Option::<HelpListResponse>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move |page: Option<String>| {
        set_loading.set(true);
        spawn_local(async move {
            match ApiClient::new().fetch_help_list(page.as_deref()).await {
                Ok(data) => {
                    let _ = set_help_data.try_set(Some(data));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error fetching help list: {err}").into());
                    let _ = set_error.try_set(Some(
                        "Failed to load help requests. Please try again later.".to_string(),
                    ));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    // 视图激活时取第一页
    load(None);

    view! {
        <div class="bg-white shadow-md rounded-lg p-6">
            <h2 class="text-2xl font-bold text-blue-800 mb-6">
                "အကူအညီတောင်းခံမှုများ"
            </h2>

            <Show when=move || loading.get()>
                <div class="flex justify-center my-8">
                    <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500"></div>
                </div>
            </Show>

            <Show when=move || error.get().is_some()>
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || help_data.get().is_some() && !loading.get()>
                <div>
                    <For
                        each=move || {
                            help_data
                                .get()
                                .map(|d| d.results.into_iter().collect::<Vec<_>>())
                                .unwrap_or_default()
                        }
                        key=|(category, _)| category.clone()
                        children=move |(category, requests)| {
                            let is_empty = requests.is_empty();
                            view! {
                                <div class="mb-8">
                                    <h3 class="text-xl font-semibold text-gray-800 mb-4">
                                        {category}
                                    </h3>

                                    <Show when=move || is_empty>
                                        <p class="text-gray-500 italic">
                                            "No requests in this category"
                                        </p>
                                    </Show>

                                    <For
                                        each={
                                            let requests = requests.clone();
                                            move || requests.clone()
                                        }
                                        key=|request| request.id
                                        children=move |request| {
                                            let display_name = if request.name.is_empty() {
                                                "Anonymous".to_string()
                                            } else {
                                                request.name.clone()
                                            };
                                            view! {
                                                <div class="border border-gray-200 rounded-md p-4 mb-4 hover:bg-gray-50">
                                                    <div class="flex justify-between items-start">
                                                        <div>
                                                            <p class="font-medium">{display_name}</p>
                                                            <p class="text-red-600">
                                                                "လိုအပ်သောအကူအညီ: " {request.cat.clone()}
                                                            </p>
                                                            <p class="text-gray-600">
                                                                "ဖုန်းနံပါတ်: " {request.phone_number.clone()}
                                                            </p>
                                                            <p class="text-gray-600 mt-2">{request.note.clone()}</p>
                                                        </div>
                                                        <div class="text-sm text-gray-500">
                                                            {request.timestamp.format("%Y-%m-%d %H:%M").to_string()}
                                                        </div>
                                                    </div>
                                                    <div class="mt-3 text-sm text-gray-600">
                                                        "Location: " {request.latitude.clone()} ", "
                                                        {request.longitude.clone()}
                                                    </div>
                                                    <div class="mt-4">
                                                        <Link
                                                            to=format!("/help/{}", request.id)
                                                            attr:class="inline-flex items-center px-3 py-1 bg-blue-500 hover:bg-blue-600 text-white rounded-md transition text-sm"
                                                        >
                                                            <Eye attr:class="h-4 w-4 mr-1" />
                                                            "အသေးစိတ်ကြည့်ရှုရန်"
                                                        </Link>
                                                    </div>
                                                </div>
                                            }
                                        }
                                    />
                                </div>
                            }
                        }
                    />

                    <Pagination
                        count=Signal::derive(move || {
                            help_data.get().map(|d| d.count).unwrap_or_default()
                        })
                        next=Signal::derive(move || help_data.get().and_then(|d| d.next))
                        previous=Signal::derive(move || help_data.get().and_then(|d| d.previous))
                        on_page_change=move |reference: String| load(Some(reference))
                    />
                </div>
            </Show>
        </div>
    }
}
