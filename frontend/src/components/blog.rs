use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::Plus;
use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::web::router::Link;
use myansafe_shared::BlogPost;

/// 情况通报列表页
#[component]
pub fn BlogPage() -> impl IntoView {
    let (posts, set_posts) = signal(Vec::<BlogPost>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let auth_ctx = use_auth();
    let is_authenticated = auth_ctx.is_authenticated_signal();

    // 视图激活时取一次
    spawn_local(async move {
        match ApiClient::new().fetch_blog_posts().await {
            Ok(data) => {
                let _ = set_posts.try_set(data.posts);
            }
            Err(err) => {
                web_sys::console::error_1(&format!("Error fetching blog posts: {err}").into());
                let _ = set_error.try_set(Some(
                    "Failed to load blog posts. Please try again later.".to_string(),
                ));
            }
        }
        let _ = set_loading.try_set(false);
    });

    view! {
        <div class="max-w-4xl mx-auto">
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-3xl font-bold">"Emergency Updates & Blog"</h1>
                <Show when=move || is_authenticated.get()>
                    <Link
                        to="/blog/create"
                        attr:class="px-4 py-2 rounded-md bg-blue-500 text-white hover:bg-blue-600 transition flex items-center gap-2"
                    >
                        <Plus attr:class="h-5 w-5" />
                        "New Post"
                    </Link>
                </Show>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="text-center py-8">"Loading blog posts..."</div> }
            >
                <Show
                    when=move || error.get().is_none()
                    fallback=move || {
                        view! {
                            <div class="bg-red-100 p-4 rounded text-red-700">
                                {move || error.get().unwrap_or_default()}
                            </div>
                        }
                    }
                >
                    <Show when=move || posts.get().is_empty()>
                        <div>"No posts available."</div>
                    </Show>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <For
                            each=move || posts.get()
                            key=|post| post.id
                            children=move |post| {
                                let cover = post.cover_image().map(str::to_string);
                                let has_cover = cover.is_some();
                                let extra_images = post.images.len().saturating_sub(1);
                                let title = post.title.clone();
                                let alt_text = post.title.clone();
                                let category = post.category.clone();
                                let content = post.content.clone();
                                let created = post.created_at.format("%Y-%m-%d").to_string();
                                let detail_path = format!("/blog/{}", post.id);
                                view! {
                                    <div class="bg-white rounded-lg shadow-md overflow-hidden">
                                        <Show when=move || has_cover>
                                            <div class="relative h-48 overflow-hidden">
                                                <img
                                                    src=cover.clone().unwrap_or_default()
                                                    alt=alt_text.clone()
                                                    class="w-full h-full object-cover"
                                                />
                                                <Show when={move || extra_images > 0}>
                                                    <div class="absolute bottom-2 right-2 bg-black bg-opacity-70 text-white text-xs px-2 py-1 rounded-full">
                                                        "+" {extra_images} " more"
                                                    </div>
                                                </Show>
                                            </div>
                                        </Show>
                                        <div class="p-4">
                                            <div class="flex justify-between items-start mb-2">
                                                <h2 class="text-xl font-semibold">{title}</h2>
                                                <span class="bg-blue-100 text-blue-800 text-xs px-2 py-1 rounded">
                                                    {category}
                                                </span>
                                            </div>
                                            <p class="text-gray-600 mb-3 line-clamp-3">{content}</p>
                                            <div class="flex justify-between items-center">
                                                <span class="text-sm text-gray-500">{created}</span>
                                                <Link
                                                    to=detail_path
                                                    attr:class="text-blue-500 hover:text-blue-700"
                                                >
                                                    "Read more →"
                                                </Link>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
