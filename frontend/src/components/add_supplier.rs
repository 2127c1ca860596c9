use leptos::prelude::*;
use leptos::task::spawn_local;

use super::location_banner::LocationBanner;
use crate::api::ApiClient;
use crate::web::geolocation::{LocationStatus, acquire_location};
use crate::web::router::{Link, use_router};
use form_state::FormState;
use myansafe_shared::{Category, City};

mod form_state;

/// 登记援助提供者页（受保护路由）
///
/// 与求助表单不同，这张表单在定位失败时禁用提交。
#[component]
pub fn AddSupplierPage() -> impl IntoView {
    let router = use_router();

    let (status, set_status) = signal(LocationStatus::Loading);
    acquire_location(set_status);

    let (cities, set_cities) = signal(Vec::<City>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());

    // 参照数据在视图激活时各取一次；失败只进控制台，表单仍可手填
    spawn_local(async move {
        match ApiClient::new().fetch_cities().await {
            Ok(data) => {
                let _ = set_cities.try_set(data.cities);
            }
            Err(err) => {
                web_sys::console::error_1(&format!("Error fetching cities: {err}").into());
            }
        }
    });
    spawn_local(async move {
        match ApiClient::new().fetch_categories().await {
            Ok(data) => {
                let _ = set_categories.try_set(data.categories);
            }
            Err(err) => {
                web_sys::console::error_1(&format!("Error fetching categories: {err}").into());
            }
        }
    });

    let form = FormState::new();
    let (is_submitting, set_is_submitting) = signal(false);
    let (submit_error, set_submit_error) = signal(Option::<String>::None);
    let (submit_success, set_submit_success) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let payload = match form.to_payload(status.get().coordinate()) {
            Ok(payload) => payload,
            Err(err) => {
                set_submit_error.set(Some(err.to_string()));
                return;
            }
        };

        set_is_submitting.set(true);
        set_submit_error.set(None);
        set_submit_success.set(false);

        spawn_local(async move {
            match ApiClient::new().create_supplier(&payload).await {
                Ok(()) => {
                    let _ = set_submit_success.try_set(true);
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                    form.reset();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error creating supplier: {err}").into());
                    let _ = set_submit_error.try_set(Some(
                        "Failed to submit your request. Please try again.".to_string(),
                    ));
                }
            }
            let _ = set_is_submitting.try_set(false);
        });
    };

    let submit_disabled = move || is_submitting.get() || status.get().is_failed();

    view! {
        <div class="bg-white shadow-md rounded-lg p-6 max-w-2xl mx-auto">
            <h2 class="text-2xl font-bold text-blue-800 mb-6">"အကူအညီပေးရန်"</h2>

            <LocationBanner status=status on_retry=move |_| acquire_location(set_status) />

            <form on:submit=on_submit class="space-y-6">
                <Show when=move || submit_success.get()>
                    <div class="bg-green-100 border-l-4 border-green-500 text-green-700 p-4 rounded mb-4">
                        <p class="text-sm">"အကူအညီပေးသူ ထည့်ခြင်း အောင်မြင်ပါတယ်"</p>
                        <div class="mt-2">
                            <Link
                                to="/suppliers"
                                attr:class="text-sm font-medium text-green-800 underline hover:text-green-900"
                            >
                                "List ကို ကြည့်ရန်"
                            </Link>
                        </div>
                    </div>
                </Show>

                <Show when=move || submit_error.get().is_some()>
                    <div class="bg-red-100 border-l-4 border-red-500 text-red-700 p-4 rounded">
                        <p class="text-sm">{move || submit_error.get().unwrap_or_default()}</p>
                    </div>
                </Show>

                <div class="space-y-4">
                    <div>
                        <label for="name" class="block text-gray-700 font-medium mb-2">
                            "နာမည်:"
                        </label>
                        <input
                            type="text"
                            id="name"
                            on:input=move |ev| {
                                form.name.set(event_target_value(&ev));
                                set_submit_success.set(false);
                                set_submit_error.set(None);
                            }
                            prop:value=move || form.name.get()
                            disabled=move || is_submitting.get()
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            required
                        />
                    </div>

                    <div>
                        <label for="phone" class="block text-gray-700 font-medium mb-2">
                            "ဖုန်းနံပါတ်:"
                        </label>
                        <input
                            type="text"
                            id="phone"
                            on:input=move |ev| {
                                form.phone.set(event_target_value(&ev));
                                set_submit_success.set(false);
                                set_submit_error.set(None);
                            }
                            prop:value=move || form.phone.get()
                            disabled=move || is_submitting.get()
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            required
                        />
                    </div>

                    <div>
                        <label for="cities" class="block text-gray-700 font-medium mb-2">
                            "လိပ်စာ:"
                        </label>
                        <select
                            id="cities"
                            on:change=move |ev| {
                                form.address.set(event_target_value(&ev));
                                set_submit_success.set(false);
                                set_submit_error.set(None);
                            }
                            prop:value=move || form.address.get()
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            required
                        >
                            <option value="">"မြို့နယ်ရွေးချယ်ရန်"</option>
                            <For
                                each=move || cities.get()
                                key=|city| city.id
                                children=move |city| {
                                    view! {
                                        <option value=city.id.to_string()>{city.name.clone()}</option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div>
                        <label class="block text-gray-700 font-medium mb-2">
                            "လိုအပ်သောအကူအညီ: (တစ်ခုထက်ပို၍ ရွေးချယ်နိုင်သည်)"
                        </label>
                        <div class="grid grid-cols-2 gap-2 mt-2">
                            <For
                                each=move || categories.get()
                                key=|category| category.id
                                children=move |category| {
                                    let id = category.id;
                                    view! {
                                        <div
                                            class=move || {
                                                if form.is_selected(id) {
                                                    "border rounded-md p-3 cursor-pointer transition-colors bg-blue-50 border-blue-500"
                                                } else {
                                                    "border rounded-md p-3 cursor-pointer transition-colors hover:bg-gray-50"
                                                }
                                            }
                                            on:click=move |_| form.toggle_category(id)
                                        >
                                            <div class="flex items-center">
                                                <input
                                                    type="checkbox"
                                                    id=format!("category-{id}")
                                                    prop:checked=move || form.is_selected(id)
                                                    class="h-4 w-4 text-blue-600 focus:ring-blue-500 border-gray-300 rounded"
                                                />
                                                <label
                                                    for=format!("category-{id}")
                                                    class="ml-2 block text-sm text-gray-900 cursor-pointer"
                                                >
                                                    {category.name.clone()}
                                                </label>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                        <Show when={move || form.selected_count() > 0}>
                            <div class="mt-2 text-sm text-gray-500">
                                "ရွေးချယ်ထားသော အကူအညီအမျိုးအစား: "
                                {move || form.selected_count()}
                            </div>
                        </Show>
                    </div>

                    <div>
                        <label for="comment" class="block text-gray-700 font-medium mb-2">
                            "အကြောင်းအရာ:"
                        </label>
                        <textarea
                            id="comment"
                            on:input=move |ev| {
                                form.comment.set(event_target_value(&ev));
                                set_submit_success.set(false);
                                set_submit_error.set(None);
                            }
                            prop:value=move || form.comment.get()
                            disabled=move || is_submitting.get()
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 h-24"
                        ></textarea>
                    </div>
                </div>

                <div class="space-y-3 pt-4">
                    <button
                        type="submit"
                        disabled=submit_disabled
                        class=move || {
                            let base = "w-full font-bold text-xl py-4 px-4 rounded-md transition duration-300 flex items-center justify-center";
                            if submit_disabled() {
                                format!("{base} bg-gray-400 cursor-not-allowed")
                            } else {
                                format!("{base} bg-red-600 hover:bg-red-700 text-white")
                            }
                        }
                    >
                        {move || if is_submitting.get() {
                            view! {
                                <div class="animate-spin rounded-full h-5 w-5 border-b-2 border-white mr-3"></div>
                                "Submitting..."
                            }
                                .into_any()
                        } else {
                            "အကူအညီပေးရန်".into_any()
                        }}
                    </button>
                    <button
                        type="button"
                        class="w-full font-medium py-3 px-4 rounded-md bg-gray-200 text-gray-700 hover:bg-gray-300 transition duration-300"
                        on:click=move |_| router.navigate("/suppliers")
                    >
                        "မထည့်တော့ပါ"
                    </button>
                </div>
            </form>
        </div>
    }
}
