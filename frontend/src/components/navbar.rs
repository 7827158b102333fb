//! 顶部导航栏
//!
//! 仅在已认证时由 App 挂载。展示品牌、看板入口、
//! 按角色显示的"新建职位"入口，以及当前用户与注销按钮。

use leptos::prelude::*;

use crate::api::use_api;
use crate::components::icons::{Briefcase, LogOut, Plus};
use crate::session::{self, use_session};
use crate::web::route::{AppRoute, JOB_AUTHOR_ROLES};
use crate::web::router::Link;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_session();
    let api = use_api();

    let user = ctx.user_signal();
    let can_create_jobs = ctx.has_role(&JOB_AUTHOR_ROLES);

    let on_logout = move |_| {
        session::logout(&api, &ctx);
    };

    view! {
        <div class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Dashboard.to_path() class="btn btn-ghost text-xl gap-2">
                    <Briefcase attr:class="h-6 w-6" />
                    "CV-Align"
                </Link>
                <Link to=AppRoute::Dashboard.to_path() class="btn btn-ghost btn-sm">
                    "Dashboard"
                </Link>
                <Show when=move || can_create_jobs.get()>
                    <Link to=AppRoute::CreateJob.to_path() class="btn btn-ghost btn-sm gap-1">
                        <Plus attr:class="h-4 w-4" />
                        "Create Job"
                    </Link>
                </Show>
            </div>
            <div class="flex-none gap-3">
                <span class="text-sm opacity-70">
                    {move || {
                        user.get()
                            .map(|u| format!("{} ({})", u.full_name, u.role.label()))
                            .unwrap_or_default()
                    }}
                </span>
                <button class="btn btn-outline btn-sm gap-1" on:click=on_logout>
                    <LogOut attr:class="h-4 w-4" />
                    "Logout"
                </button>
            </div>
        </div>
    }
}
