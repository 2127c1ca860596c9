use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{ArrowLeft, Trash};
use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use myansafe_shared::BlogPost;

/// 情况通报详情页
///
/// 编辑与删除入口只对已认证用户显示；删除成功后回到列表。
#[component]
pub fn BlogDetailPage(id: String) -> impl IntoView {
    let (post, set_post) = signal(Option::<BlogPost>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (deleting, set_deleting) = signal(false);

    let post_id = StoredValue::new(id);
    let router = use_router();

    let auth_ctx = use_auth();
    let is_authenticated = auth_ctx.is_authenticated_signal();

    {
        let id = post_id.get_value();
        spawn_local(async move {
            match ApiClient::new().fetch_blog_post(&id).await {
                Ok(data) => {
                    let _ = set_post.try_set(Some(data));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error fetching blog post: {err}").into());
                    let _ = set_error.try_set(Some(
                        "Failed to load blog post. Please try again later.".to_string(),
                    ));
                }
            }
            let _ = set_loading.try_set(false);
        });
    }

    let on_delete = move |_| {
        set_deleting.set(true);
        let id = post_id.get_value();
        spawn_local(async move {
            match ApiClient::new().delete_blog_post(&id).await {
                Ok(()) => {
                    router.navigate("/blog");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error deleting blog post: {err}").into());
                    let _ = set_error.try_set(Some(
                        "Failed to delete blog post. Please try again.".to_string(),
                    ));
                }
            }
            let _ = set_deleting.try_set(false);
        });
    };

    view! {
        <div class="max-w-4xl mx-auto">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="text-center py-8">"Loading post..."</div> }
            >
                <Show when=move || error.get().is_some()>
                    <div class="bg-red-100 p-4 rounded text-red-700 mb-4">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <Show
                    when=move || post.get().is_some()
                    fallback=move || {
                        view! {
                            <Show when=move || error.get().is_none()>
                                <div>"Post not found"</div>
                            </Show>
                        }
                    }
                >
                    <div class="bg-white rounded-lg shadow-lg overflow-hidden">
                        {move || {
                            post.get()
                                .and_then(|p| p.cover_image().map(str::to_string))
                                .map(|cover| {
                                    view! {
                                        <div class="relative h-64 md:h-96">
                                            <img
                                                src=cover
                                                alt=move || {
                                                    post.get().map(|p| p.title).unwrap_or_default()
                                                }
                                                class="w-full h-full object-cover"
                                            />
                                        </div>
                                    }
                                })
                        }}

                        <div class="p-6">
                            <div class="flex justify-between items-center mb-4">
                                <h1 class="text-3xl font-bold">
                                    {move || post.get().map(|p| p.title).unwrap_or_default()}
                                </h1>
                                <span class="bg-blue-100 text-blue-800 px-3 py-1 rounded-full text-sm">
                                    {move || post.get().map(|p| p.category).unwrap_or_default()}
                                </span>
                            </div>

                            <div class="text-gray-500 mb-6">
                                <span>
                                    "Posted on "
                                    {move || {
                                        post.get()
                                            .map(|p| p.created_at.format("%Y-%m-%d").to_string())
                                            .unwrap_or_default()
                                    }}
                                </span>
                                {move || {
                                    post.get().and_then(|p| p.author).map(|author| {
                                        view! { <span>" by " {author}</span> }
                                    })
                                }}
                            </div>

                            <div class="prose max-w-none">
                                {move || {
                                    post.get()
                                        .map(|p| {
                                            p.content
                                                .split('\n')
                                                .map(|paragraph| {
                                                    view! { <p class="mb-4">{paragraph.to_string()}</p> }
                                                })
                                                .collect::<Vec<_>>()
                                        })
                                        .unwrap_or_default()
                                }}
                            </div>

                            // 多图时在正文下方平铺其余图片
                            {move || {
                                let extra: Vec<String> = post
                                    .get()
                                    .map(|p| p.images.iter().skip(1).cloned().collect())
                                    .unwrap_or_default();
                                (!extra.is_empty()).then(|| {
                                    view! {
                                        <div class="grid grid-cols-2 md:grid-cols-3 gap-4 mt-6">
                                            {extra
                                                .into_iter()
                                                .map(|url| {
                                                    view! {
                                                        <img
                                                            src=url
                                                            class="w-full h-32 object-cover rounded"
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                })
                            }}

                            <div class="mt-8 pt-6 border-t border-gray-200 flex justify-between items-center">
                                <Link
                                    to="/blog"
                                    attr:class="inline-flex items-center text-blue-500 hover:text-blue-700"
                                >
                                    <ArrowLeft attr:class="h-5 w-5 mr-1" />
                                    "Back to all posts"
                                </Link>

                                <Show when=move || is_authenticated.get()>
                                    <div class="flex space-x-3">
                                        <Link
                                            to=format!("/blog/{}/edit", post_id.get_value())
                                            attr:class="px-3 py-1.5 bg-gray-200 hover:bg-gray-300 text-gray-800 rounded-md transition text-sm"
                                        >
                                            "Edit"
                                        </Link>
                                        <button
                                            on:click=on_delete
                                            disabled=move || deleting.get()
                                            class="px-3 py-1.5 bg-red-500 hover:bg-red-600 text-white rounded-md transition text-sm flex items-center disabled:opacity-50"
                                        >
                                            <Trash attr:class="h-4 w-4 mr-1" />
                                            {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
