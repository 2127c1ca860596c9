use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::ArrowLeft;
use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::web::router::Link;
use myansafe_shared::validate::validate_comment_text;
use myansafe_shared::{Comment, GeoCoordinate, HelpDetailRecord};

/// 地图子视图用的 OpenStreetMap 嵌入地址
///
/// 纯 URL 拼接，不集成任何脚本化地图控件；iframe 加载失败
/// 也不会影响页面其余部分。
fn osm_embed_url(c: GeoCoordinate) -> String {
    let d = 0.005;
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={:.6}%2C{:.6}%2C{:.6}%2C{:.6}&layer=mapnik&marker={}%2C{}",
        c.longitude - d,
        c.latitude - d,
        c.longitude + d,
        c.latitude + d,
        c.latitude,
        c.longitude,
    )
}

/// 求助详情页
///
/// 主记录与留言各自独立拉取，互不阻塞；任一失败不影响另一个渲染。
#[component]
pub fn HelpDetailPage(id: String) -> impl IntoView {
    let (record, set_record) = signal(Option::<HelpDetailRecord>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (comments, set_comments) = signal(Vec::<Comment>::new());

    let help_id = StoredValue::new(id);

    // 主资源
    {
        let id = help_id.get_value();
        spawn_local(async move {
            match ApiClient::new().fetch_help_by_id(&id).await {
                Ok(data) => {
                    let _ = set_record.try_set(Some(data.request));
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Error fetching help details: {err}").into(),
                    );
                    let _ = set_error.try_set(Some(
                        "Failed to load help request details. Please try again later.".to_string(),
                    ));
                }
            }
            let _ = set_loading.try_set(false);
        });
    }

    // 留言，独立于主资源
    {
        let id = help_id.get_value();
        spawn_local(async move {
            match ApiClient::new().fetch_comments(&id).await {
                Ok(data) => {
                    let _ = set_comments.try_set(data.comments);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error fetching comments: {err}").into());
                }
            }
        });
    }

    let auth_ctx = use_auth();
    let is_authenticated = auth_ctx.is_authenticated_signal();

    let (comment_text, set_comment_text) = signal(String::new());
    let (comment_submitting, set_comment_submitting) = signal(false);

    let on_comment_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = comment_text.get();
        if validate_comment_text(&text).is_err() {
            return;
        }

        set_comment_submitting.set(true);
        let id = help_id.get_value();
        spawn_local(async move {
            match ApiClient::new().submit_comment(&id, text.clone()).await {
                Ok(receipt) => {
                    let _ = set_comment_text.try_set(String::new());
                    let _ = set_comments.try_update(|list| {
                        list.push(Comment {
                            id: receipt.id,
                            text,
                            author: receipt.author,
                            timestamp: receipt.timestamp,
                        });
                    });
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error submitting comment: {err}").into());
                }
            }
            let _ = set_comment_submitting.try_set(false);
        });
    };

    view! {
        <div class="bg-white shadow-md rounded-lg p-6">
            <div class="flex items-center mb-6">
                <Link
                    to="/help-list"
                    attr:class="mr-4 text-blue-600 hover:text-blue-800 flex items-center"
                >
                    <ArrowLeft attr:class="h-5 w-5 mr-1" />
                    "Back to List"
                </Link>
                <h2 class="text-2xl font-bold text-blue-800">"Help Request Details"</h2>
            </div>

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

            <Show when=move || record.get().is_some() && !loading.get()>
                <div class="grid md:grid-cols-2 gap-6">
                    <div class="bg-gray-50 p-4 rounded-lg">
                        <h3 class="text-lg font-semibold text-gray-800 mb-4 border-b pb-2">
                            "Contact Information"
                        </h3>

                        <div class="space-y-3">
                            <div>
                                <div class="text-sm text-gray-500">"Name"</div>
                                <div class="font-medium">
                                    {move || {
                                        let name = record.get().map(|r| r.name).unwrap_or_default();
                                        if name.is_empty() { "Anonymous".to_string() } else { name }
                                    }}
                                </div>
                            </div>

                            <div>
                                <div class="text-sm text-gray-500">"Phone"</div>
                                <div class="font-medium">
                                    {move || {
                                        let phone = record.get().map(|r| r.phone).unwrap_or_default();
                                        if phone.is_empty() { "Not provided".to_string() } else { phone }
                                    }}
                                </div>
                            </div>

                            <div>
                                <div class="text-sm text-gray-500">"Location"</div>
                                <div class="font-medium">
                                    {move || {
                                        let city = record.get().map(|r| r.city).unwrap_or_default();
                                        if city.is_empty() { "Not specified".to_string() } else { city }
                                    }}
                                </div>
                            </div>

                            <div>
                                <div class="text-sm text-gray-500">"Note"</div>
                                <div class="mt-1 p-2 bg-white rounded border border-gray-100">
                                    {move || {
                                        let note = record.get().map(|r| r.note).unwrap_or_default();
                                        if note.is_empty() {
                                            "No additional notes provided.".to_string()
                                        } else {
                                            note
                                        }
                                    }}
                                </div>
                            </div>
                        </div>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold text-gray-800 mb-4">"Map Location"</h3>
                        {move || match record.get().and_then(|r| r.coordinate()) {
                            Some(coordinate) => view! {
                                <iframe
                                    src=osm_embed_url(coordinate)
                                    class="w-full h-64 bg-gray-100 rounded-lg border-0"
                                    {leptos::attr::custom::custom_attribute("loading", "lazy")}
                                ></iframe>
                            }
                                .into_any(),
                            None => view! {
                                <div class="h-64 bg-gray-100 rounded-lg flex items-center justify-center">
                                    <div class="text-gray-500">"No location available"</div>
                                </div>
                            }
                                .into_any(),
                        }}
                        <div class="mt-2 text-sm text-gray-600">
                            "Coordinates: "
                            {move || record.get().map(|r| r.lat).unwrap_or_default()} ", "
                            {move || record.get().map(|r| r.lon).unwrap_or_default()}
                        </div>
                    </div>
                </div>

                <div class="mt-6 pt-4 border-t">
                    <h3 class="text-lg font-semibold text-gray-800 mb-3">"Actions"</h3>
                    <div class="flex space-x-3">
                        <Show when=move || record.get().map(|r| !r.phone.is_empty()).unwrap_or(false)>
                            <a
                                href=move || {
                                    format!("tel:{}", record.get().map(|r| r.phone).unwrap_or_default())
                                }
                                class="px-4 py-2 bg-green-500 hover:bg-green-600 text-white rounded-md transition"
                            >
                                "Call Now"
                            </a>
                        </Show>
                        <Link
                            to="/help-list"
                            attr:class="px-4 py-2 bg-gray-200 hover:bg-gray-300 text-gray-800 rounded-md transition"
                        >
                            "Back to List"
                        </Link>
                    </div>
                </div>
            </Show>

            // 留言区不依赖主记录的加载状态
            <div class="mt-8 pt-4 border-t">
                <h3 class="text-lg font-semibold text-gray-800 mb-3">"Comments"</h3>

                <Show when=move || comments.get().is_empty()>
                    <p class="text-gray-500 italic mb-4">"No comments yet."</p>
                </Show>

                <For
                    each=move || comments.get()
                    key=|comment| comment.id
                    children=move |comment| {
                        view! {
                            <div class="border border-gray-200 rounded-md p-3 mb-3">
                                <div class="flex justify-between items-center mb-1">
                                    <span class="font-medium text-sm">
                                        {if comment.author.is_empty() {
                                            "Anonymous".to_string()
                                        } else {
                                            comment.author.clone()
                                        }}
                                    </span>
                                    <span class="text-xs text-gray-500">
                                        {comment.timestamp.format("%Y-%m-%d %H:%M").to_string()}
                                    </span>
                                </div>
                                <p class="text-sm text-gray-700">{comment.text.clone()}</p>
                            </div>
                        }
                    }
                />

                <Show when=move || is_authenticated.get()>
                    <form on:submit=on_comment_submit class="mt-4">
                        <textarea
                            on:input=move |ev| set_comment_text.set(event_target_value(&ev))
                            prop:value=comment_text
                            disabled=move || comment_submitting.get()
                            placeholder="Write a comment..."
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 h-20"
                            required
                        ></textarea>
                        <button
                            type="submit"
                            disabled=move || comment_submitting.get()
                            class="mt-2 px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white rounded-md transition disabled:opacity-50"
                        >
                            {move || if comment_submitting.get() { "Posting..." } else { "Post Comment" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osm_embed_url_carries_marker_and_bbox() {
        let url = osm_embed_url(GeoCoordinate {
            latitude: 16.8,
            longitude: 96.1,
        });

        assert!(url.starts_with("https://www.openstreetmap.org/export/embed.html?bbox="));
        assert!(url.contains("marker=16.8%2C96.1"));
        assert!(url.contains("96.095000%2C16.795000%2C96.105000%2C16.805000"));
    }
}
