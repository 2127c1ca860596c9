use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use myansafe_shared::validate::validate_blog_fields;

/// 文章分类是客户端固定的
const BLOG_CATEGORIES: [(&str, &str); 5] = [
    ("general", "General"),
    ("warning", "Emergency Warning"),
    ("update", "Situation Update"),
    ("resource", "Resource Information"),
    ("safety", "Safety Tips"),
];

/// 发布/编辑情况通报页（受保护路由）
///
/// `post_id` 为 Some 时是编辑模式：预填现有文章，提交走 PUT。
/// 支持多图：添加、预览、按下标移除——文件列表与预览列表始终同步。
#[component]
pub fn BlogFormPage(post_id: Option<String>) -> impl IntoView {
    let is_edit = post_id.is_some();
    let post_id = StoredValue::new(post_id);

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (category, set_category) = signal("general".to_string());
    let (files, set_files) = signal(Vec::<web_sys::File>::new());
    let (previews, set_previews) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (success, set_success) = signal(false);

    // 编辑模式：载入现有文章预填（已有图片不重传，提交只带新增文件）
    if is_edit {
        if let Some(id) = post_id.get_value() {
            spawn_local(async move {
                match ApiClient::new().fetch_blog_post(&id).await {
                    Ok(post) => {
                        let _ = set_title.try_set(post.title);
                        let _ = set_content.try_set(post.content);
                        let _ = set_category.try_set(post.category);
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Error fetching blog post: {err}").into(),
                        );
                        let _ = set_error.try_set(Some(
                            "Failed to load blog post. Please try again later.".to_string(),
                        ));
                    }
                }
            });
        }
    }

    let on_image_change = move |ev: leptos::web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            for index in 0..list.length() {
                if let Some(file) = list.get(index) {
                    match web_sys::Url::create_object_url_with_blob(&file) {
                        Ok(url) => {
                            set_files.update(|f| f.push(file));
                            set_previews.update(|p| p.push(url));
                        }
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("Error creating preview URL: {err:?}").into(),
                            );
                        }
                    }
                }
            }
        }
        // 清空 input 以便重复选择同一文件
        input.set_value("");
    };

    // 通过预览 URL 定位下标，文件与预览按同一下标成对移除
    let remove_image = move |url: String| {
        let Some(index) = previews.get_untracked().iter().position(|p| *p == url) else {
            return;
        };
        set_files.update(|f| {
            f.remove(index);
        });
        set_previews.update(|p| {
            let removed = p.remove(index);
            let _ = web_sys::Url::revoke_object_url(&removed);
        });
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        if validate_blog_fields(&title.get(), &content.get()).is_err() {
            set_error.set(Some("Title and content are required".to_string()));
            return;
        }

        let Ok(form) = web_sys::FormData::new() else {
            set_error.set(Some("Failed to create blog post. Please try again.".to_string()));
            return;
        };
        let _ = form.append_with_str("title", &title.get());
        let _ = form.append_with_str("content", &content.get());
        let _ = form.append_with_str("category", &category.get());
        for file in files.get() {
            let _ = form.append_with_blob_and_filename("images", &file, &file.name());
        }

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let api = ApiClient::new();
            let result = match post_id.get_value() {
                Some(id) => api.update_blog_post(&id, form).await,
                None => api.create_blog_post(form).await,
            };

            match result {
                Ok(()) => {
                    let _ = set_title.try_set(String::new());
                    let _ = set_content.try_set(String::new());
                    let _ = set_category.try_set("general".to_string());
                    let _ = set_files.try_set(Vec::new());
                    let _ = set_previews.try_update(|p| {
                        for url in p.drain(..) {
                            let _ = web_sys::Url::revoke_object_url(&url);
                        }
                    });
                    let _ = set_success.try_set(true);
                    // 固定延时后自动收起成功提示
                    set_timeout(
                        move || {
                            let _ = set_success.try_set(false);
                        },
                        Duration::from_secs(3),
                    );
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error saving blog post: {err}").into());
                    let _ = set_error.try_set(Some(
                        "Failed to create blog post. Please try again.".to_string(),
                    ));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    view! {
        <div class="max-w-4xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">
                {if is_edit { "Edit Blog Post" } else { "Create New Blog Post" }}
            </h1>

            <Show when=move || success.get()>
                <div class="bg-green-100 border-l-4 border-green-500 text-green-700 p-4 mb-6" role="alert">
                    <p>
                        {if is_edit {
                            "Blog post updated successfully!"
                        } else {
                            "Blog post created successfully!"
                        }}
                    </p>
                </div>
            </Show>

            <Show when=move || error.get().is_some()>
                <div class="bg-red-100 border-l-4 border-red-500 text-red-700 p-4 mb-6" role="alert">
                    <p>{move || error.get().unwrap_or_default()}</p>
                </div>
            </Show>

            <form on:submit=on_submit class="bg-white rounded-lg shadow-md p-6">
                <div class="mb-4">
                    <label for="title" class="block text-gray-700 font-medium mb-2">
                        "Title"
                    </label>
                    <input
                        type="text"
                        id="title"
                        placeholder="Enter post title"
                        on:input=move |ev| {
                            set_title.set(event_target_value(&ev));
                            set_error.set(None);
                            set_success.set(false);
                        }
                        prop:value=title
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        required
                    />
                </div>

                <div class="mb-4">
                    <label for="category" class="block text-gray-700 font-medium mb-2">
                        "Category"
                    </label>
                    <select
                        id="category"
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                        prop:value=category
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    >
                        {BLOG_CATEGORIES
                            .iter()
                            .map(|(id, name)| {
                                view! { <option value=*id>{*name}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="mb-4">
                    <label for="images" class="block text-gray-700 font-medium mb-2">
                        "Images (Optional)"
                    </label>
                    <input
                        type="file"
                        id="images"
                        accept="image/*"
                        multiple
                        on:change=on_image_change
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                    <Show when=move || !previews.get().is_empty()>
                        <div class="mt-2 grid grid-cols-3 gap-2">
                            <For
                                each=move || previews.get()
                                key=|url| url.clone()
                                children=move |url| {
                                    let preview = url.clone();
                                    view! {
                                        <div class="relative">
                                            <img
                                                src=preview.clone()
                                                alt="Preview"
                                                class="h-32 w-full object-contain border rounded"
                                            />
                                            <button
                                                type="button"
                                                on:click=move |_| remove_image(url.clone())
                                                class="absolute top-1 right-1 bg-red-500 hover:bg-red-600 text-white rounded-full h-6 w-6 flex items-center justify-center text-xs"
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>

                <div class="mb-4">
                    <label for="content" class="block text-gray-700 font-medium mb-2">
                        "Content"
                    </label>
                    <textarea
                        id="content"
                        rows="10"
                        placeholder="Write your post content here..."
                        on:input=move |ev| {
                            set_content.set(event_target_value(&ev));
                            set_error.set(None);
                            set_success.set(false);
                        }
                        prop:value=content
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        required
                    ></textarea>
                </div>

                <div class="flex justify-end">
                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="px-4 py-2 bg-blue-500 text-white rounded-md hover:bg-blue-600 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 disabled:opacity-50"
                    >
                        {move || {
                            if loading.get() {
                                "Publishing..."
                            } else if is_edit {
                                "Update Post"
                            } else {
                                "Publish Post"
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
