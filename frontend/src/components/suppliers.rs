use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{MapPin, Plus};
use super::pagination::Pagination;
use crate::api::ApiClient;
use crate::web::router::Link;
use myansafe_shared::SuppliersResponse;
use myansafe_shared::group::group_by_category;

/// 援助提供者列表页（受保护路由）
///
/// 分组在客户端做：一条记录属于几个分类就在几个分组里各出现一次，
/// "အားလုံး"（全部）伪分组永远可选。
#[component]
pub fn SuppliersPage() -> impl IntoView {
    let (supplier_data, set_supplier_data) = signal(Option::<SuppliersResponse>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (active_category, set_active_category) = signal(Option::<String>::None);

    let load = move |page: Option<String>| {
        set_loading.set(true);
        spawn_local(async move {
            match ApiClient::new().fetch_suppliers(page.as_deref()).await {
                Ok(data) => {
                    let _ = set_supplier_data.try_set(Some(data));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error fetching suppliers: {err}").into());
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

    let grouped = Memo::new(move |_| {
        supplier_data
            .get()
            .map(|d| group_by_category(&d.results))
            .unwrap_or_default()
    });

    view! {
        <div class="bg-white shadow-md rounded-lg p-6 max-w-4xl mx-auto">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold text-blue-800">"အကူအညီပေးနိုင်သူများ"</h2>
                <Link
                    to="/add-supplier"
                    attr:class="px-4 py-2 rounded-md bg-blue-500 text-white hover:bg-blue-600 transition duration-300 flex items-center gap-2"
                >
                    <Plus attr:class="h-5 w-5" />
                    "ထပ်ထည့်ရန်"
                </Link>
            </div>

            <Show when=move || loading.get()>
                <div class="flex justify-center my-8">
                    <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500"></div>
                </div>
            </Show>

            <Show when=move || error.get().is_some()>
                <div class="bg-red-100 border-l-4 border-red-500 text-red-700 p-4 rounded mb-4">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || supplier_data.get().is_some() && !loading.get()>
                <div>
                    // 分类筛选条："အားလုံး" 永远在最前
                    <div class="mb-6 overflow-x-auto">
                        <div class="flex space-x-2">
                            <button
                                on:click=move |_| set_active_category.set(None)
                                class=move || {
                                    if active_category.get().is_none() {
                                        "px-3 py-1.5 rounded-full text-sm font-medium transition bg-blue-500 text-white"
                                    } else {
                                        "px-3 py-1.5 rounded-full text-sm font-medium transition bg-gray-200 text-gray-700 hover:bg-gray-300"
                                    }
                                }
                            >
                                "အားလုံး"
                            </button>
                            <For
                                each={move || grouped.get().keys().cloned().collect::<Vec<_>>()}
                                key=|category| category.clone()
                                children=move |category| {
                                    let chip = category.clone();
                                    let label = category.clone();
                                    view! {
                                        <button
                                            on:click={
                                                let chip = chip.clone();
                                                move |_| set_active_category.set(Some(chip.clone()))
                                            }
                                            class=move || {
                                                if active_category.get().as_deref() == Some(category.as_str()) {
                                                    "px-3 py-1.5 rounded-full text-sm font-medium transition whitespace-nowrap bg-blue-500 text-white"
                                                } else {
                                                    "px-3 py-1.5 rounded-full text-sm font-medium transition whitespace-nowrap bg-gray-200 text-gray-700 hover:bg-gray-300"
                                                }
                                            }
                                        >
                                            {label}
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </div>

                    <For
                        each={move || grouped.get().into_iter().collect::<Vec<_>>()}
                        key=|(category, _)| category.clone()
                        children=move |(category, suppliers)| {
                            let group_name = category.clone();
                            let is_visible = move || {
                                let active = active_category.get();
                                active.is_none() || active.as_deref() == Some(category.as_str())
                            };
                            view! {
                                <Show when=is_visible>
                                    <div class="mb-8">
                                        <h3 class="text-lg font-semibold text-gray-700 mb-3 border-b pb-2">
                                            {group_name.clone()}
                                        </h3>

                                        <For
                                            each={
                                                let suppliers = suppliers.clone();
                                                move || suppliers.clone()
                                            }
                                            key=|supplier| supplier.id
                                            children=move |supplier| {
                                                let display_name = if supplier.name.is_empty() {
                                                    "Anonymous".to_string()
                                                } else {
                                                    supplier.name.clone()
                                                };
                                                view! {
                                                    <div class="border border-gray-200 rounded-md p-4 mb-4 hover:bg-gray-50 transition-colors duration-200 shadow-sm">
                                                        <div class="flex justify-between items-start">
                                                            <div>
                                                                <p class="font-medium text-lg">{display_name}</p>
                                                                <div class="flex items-center mt-1">
                                                                    <span class="inline-block bg-red-100 text-red-800 text-xs px-2 py-1 rounded-full mr-2">
                                                                        {supplier.cat_names.join(", ")}
                                                                    </span>
                                                                    <p class="text-gray-600 text-sm">
                                                                        "ဖုန်းနံပါတ်: " {supplier.phone_number.clone()}
                                                                    </p>
                                                                </div>
                                                                <p class="text-gray-600 mt-2 text-sm">
                                                                    {supplier.note.clone()}
                                                                </p>
                                                            </div>
                                                            <div class="text-xs text-gray-500 bg-gray-100 px-2 py-1 rounded">
                                                                {supplier.timestamp.format("%Y-%m-%d %H:%M").to_string()}
                                                            </div>
                                                        </div>
                                                        <div class="mt-3 text-xs text-gray-500 flex items-center">
                                                            <MapPin attr:class="h-4 w-4 mr-1" />
                                                            {supplier.latitude.clone()} ", " {supplier.longitude.clone()}
                                                        </div>
                                                    </div>
                                                }
                                            }
                                        />
                                    </div>
                                </Show>
                            }
                        }
                    />

                    <Pagination
                        count=Signal::derive(move || {
                            supplier_data.get().map(|d| d.count).unwrap_or_default()
                        })
                        next=Signal::derive(move || supplier_data.get().and_then(|d| d.next))
                        previous=Signal::derive(move || {
                            supplier_data.get().and_then(|d| d.previous)
                        })
                        on_page_change=move |reference: String| load(Some(reference))
                    />
                </div>
            </Show>
        </div>
    }
}
