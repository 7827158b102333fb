//! CV 上传组件
//!
//! 选择文件后在本地先做类型/大小校验，校验不通过不发请求。
//! 上传成功后把后端返回的摘要交给父组件，由详情页继续拉取完整评估。

use cvalign_shared::upload::{validate_cv_file, MAX_CV_BYTES};
use cvalign_shared::CvUploadResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::api::use_api;
use crate::components::icons::Upload as UploadIcon;

#[component]
pub fn CvUpload(
    /// 目标职位 id
    job_id: i64,
    /// 上传成功回调（参数是后端返回的摘要）
    #[prop(into)]
    on_uploaded: Callback<CvUploadResponse>,
) -> impl IntoView {
    let api = use_api();

    // File 是 JS 句柄，不跨线程，走 local 信号
    let (file, set_file) = signal_local::<Option<web_sys::File>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (uploading, set_uploading) = signal(false);

    let on_change = move |ev: web_sys::Event| {
        set_error.set(None);
        let input = event_target::<HtmlInputElement>(&ev);
        let selected = input.files().and_then(|list| list.get(0));

        match selected {
            Some(f) => {
                // 本地校验先于网络请求
                if let Err(err) = validate_cv_file(&f.type_(), f.size() as u64) {
                    set_error.set(Some(err.to_string()));
                    set_file.set(None);
                    input.set_value("");
                } else {
                    set_file.set(Some(f));
                }
            }
            None => set_file.set(None),
        }
    };

    let on_upload = move |_| {
        let Some(f) = file.get_untracked() else {
            return;
        };
        if uploading.get_untracked() {
            return;
        }

        set_uploading.set(true);
        set_error.set(None);
        let api = api.clone();
        spawn_local(async move {
            match api.upload_cv(job_id, &f).await {
                Ok(resp) => {
                    set_file.set(None);
                    set_uploading.set(false);
                    on_uploaded.run(resp);
                }
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                    set_uploading.set(false);
                }
            }
        });
    };

    let file_info = move || {
        file.get().map(|f| {
            let size_mb = f.size() / (1024.0 * 1024.0);
            format!("{} ({:.2} MB)", f.name(), size_mb)
        })
    };

    view! {
        <div class="card bg-base-100 shadow-md">
            <div class="card-body gap-3">
                <h3 class="card-title text-base">"Upload CV"</h3>
                <p class="text-sm opacity-70">
                    {format!(
                        "PDF, DOCX or TXT, up to {} MB.",
                        MAX_CV_BYTES / (1024 * 1024),
                    )}
                </p>
                <input
                    type="file"
                    class="file-input file-input-bordered w-full"
                    accept=".pdf,.docx,.txt"
                    disabled=move || uploading.get()
                    on:change=on_change
                />
                <Show when=move || file.get().is_some()>
                    <div class="text-sm">{file_info}</div>
                </Show>
                <Show when=move || error.get().is_some()>
                    <div class="alert alert-error text-sm py-2">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <div class="card-actions justify-end">
                    <button
                        class="btn btn-primary btn-sm gap-1"
                        disabled=move || file.get().is_none() || uploading.get()
                        on:click=on_upload
                    >
                        <UploadIcon attr:class="h-4 w-4" />
                        {move || if uploading.get() { "Uploading..." } else { "Upload & Evaluate" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
