use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::CheckCircle;
use crate::api::ApiClient;
use myansafe_shared::GeoCoordinate;
use myansafe_shared::validate::build_help_payload;

/// 求助提交表单
///
/// 状态机：idle -> submitting -> {success, error}，下一次编辑回到 idle。
/// 坐标由上层页面传入，取不到时以空字符串提交。
#[component]
pub fn LocationForm(#[prop(into)] coordinate: Signal<Option<GeoCoordinate>>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (comment, set_comment) = signal(String::new());

    let (is_submitting, set_is_submitting) = signal(false);
    let (submit_error, set_submit_error) = signal(Option::<String>::None);
    let (submit_success, set_submit_success) = signal(false);

    // 编辑任何字段都把表单带回 idle
    let mark_edited = move || {
        set_submit_error.set(None);
        set_submit_success.set(false);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        // 校验失败就不发请求
        let payload = match build_help_payload(
            &name.get(),
            &phone.get(),
            &address.get(),
            &comment.get(),
            coordinate.get(),
        ) {
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
            match ApiClient::new().submit_help_request(&payload).await {
                Ok(()) => {
                    // 成功后清空表单
                    let _ = set_name.try_set(String::new());
                    let _ = set_phone.try_set(String::new());
                    let _ = set_address.try_set(String::new());
                    let _ = set_comment.try_set(String::new());
                    let _ = set_submit_success.try_set(true);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Error submitting help request: {err}").into(),
                    );
                    let _ = set_submit_error.try_set(Some(
                        "Failed to submit your request. Please try again.".to_string(),
                    ));
                }
            }
            let _ = set_is_submitting.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="bg-white shadow-md rounded-lg p-6">
            <Show when=move || submit_success.get()>
                <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded mb-4 flex items-center">
                    <CheckCircle attr:class="h-5 w-5 mr-2" />
                    "Your help request has been submitted successfully!"
                </div>
            </Show>

            <Show when=move || submit_error.get().is_some()>
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {move || submit_error.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="mb-4">
                <label for="name" class="block text-gray-700 font-medium mb-2">
                    "Name:"
                </label>
                <input
                    type="text"
                    id="name"
                    on:input=move |ev| {
                        set_name.set(event_target_value(&ev));
                        mark_edited();
                    }
                    prop:value=name
                    disabled=move || is_submitting.get()
                    class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    required
                />
            </div>

            <div class="mb-4">
                <label for="phone" class="block text-gray-700 font-medium mb-2">
                    "Phone:"
                </label>
                <input
                    type="text"
                    id="phone"
                    on:input=move |ev| {
                        set_phone.set(event_target_value(&ev));
                        mark_edited();
                    }
                    prop:value=phone
                    disabled=move || is_submitting.get()
                    class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    required
                />
            </div>

            <div class="mb-4">
                <label for="address" class="block text-gray-700 font-medium mb-2">
                    "Address:"
                </label>
                <input
                    type="text"
                    id="address"
                    placeholder="Enter your address"
                    on:input=move |ev| {
                        set_address.set(event_target_value(&ev));
                        mark_edited();
                    }
                    prop:value=address
                    disabled=move || is_submitting.get()
                    class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    required
                />
            </div>

            <div class="mb-4">
                <label for="comment" class="block text-gray-700 font-medium mb-2">
                    "Comment:"
                </label>
                <textarea
                    id="comment"
                    on:input=move |ev| {
                        set_comment.set(event_target_value(&ev));
                        mark_edited();
                    }
                    prop:value=comment
                    disabled=move || is_submitting.get()
                    class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 h-24"
                ></textarea>
            </div>

            <button
                type="submit"
                disabled=move || is_submitting.get()
                class=move || {
                    let base = "w-full font-bold py-2 px-4 rounded-md transition duration-300";
                    if is_submitting.get() {
                        format!("{base} bg-gray-400 cursor-not-allowed")
                    } else {
                        format!("{base} bg-blue-600 hover:bg-blue-700 text-white")
                    }
                }
            >
                {move || if is_submitting.get() { "Submitting..." } else { "အကူအညီရယူရန်" }}
            </button>
        </form>
    }
}
