//! Sidebar: establishment switcher, feature navigation gated by the
//! access-control table, onboarding entry point and the support dialog.

use contracts::enums::Feature;
use leptos::prelude::*;

use crate::domain::establishment::context::use_establishment;
use crate::domain::membership::access::use_can_access;
use crate::domain::membership::context::use_memberships;
use crate::domain::support::ui::SupportDialog;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::session::storage;
use crate::usecases::onboarding::OnboardingWizard;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: &'static str,
    icon: &'static str,
    feature: Feature,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "insights",
            label: "Insights",
            icon: "analytics",
            items: vec![
                MenuItem { key: "performance", icon: "performance", feature: Feature::Performance },
                MenuItem { key: "financial_reports", icon: "analytics", feature: Feature::Analytics },
            ],
        },
        MenuGroup {
            id: "operations",
            label: "Operations",
            icon: "recipes",
            items: vec![
                MenuItem { key: "invoices", icon: "invoices", feature: Feature::Invoices },
                MenuItem { key: "recipes", icon: "recipes", feature: Feature::Recipes },
                MenuItem { key: "mercuriales", icon: "mercuriales", feature: Feature::Mercuriales },
            ],
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "settings",
            items: vec![
                MenuItem { key: "team", icon: "team", feature: Feature::Team },
                MenuItem { key: "billing", icon: "billing", feature: Feature::Billing },
                MenuItem { key: "settings", icon: "settings", feature: Feature::Settings },
            ],
        },
    ]
}

fn restore_expanded_groups() -> Vec<String> {
    storage::get_sidebar_detail_path()
        .map(|path| path.split('/').map(str::to_string).collect())
        .unwrap_or_else(|| vec!["insights".to_string()])
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let establishment = use_establishment();
    let memberships = use_memberships();

    let expanded_groups = RwSignal::new(restore_expanded_groups());
    let (show_onboarding, set_show_onboarding) = signal(false);
    let (show_support, set_show_support) = signal(false);

    // Remember which sections are open across reloads within the tab
    Effect::new(move |_| {
        let joined = expanded_groups.get().join("/");
        storage::save_sidebar_detail_path(&joined);
    });

    let switcher_options = move || {
        memberships
            .memberships
            .get()
            .into_iter()
            .map(|m| {
                let id = m.establishment_id.to_string();
                let name = m
                    .establishment_name
                    .unwrap_or_else(|| id.clone());
                (id, name)
            })
            .collect::<Vec<_>>()
    };

    let on_switch = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if value.is_empty() {
            establishment.clear();
        } else {
            establishment.select(&value);
        }
    };

    // Per-item access signals, computed once
    let groups: Vec<_> = menu_groups()
        .into_iter()
        .map(|group| {
            let items: Vec<(MenuItem, Signal<bool>)> = group
                .items
                .iter()
                .cloned()
                .map(|item| {
                    let can = use_can_access(item.feature);
                    (item, can)
                })
                .collect();
            (group, items)
        })
        .collect();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__switcher">
                <select on:change=on_switch>
                    <option value="" selected=move || establishment.active_id.get().is_none()>
                        "Select establishment..."
                    </option>
                    {move || {
                        let active = establishment.active_id.get();
                        switcher_options().into_iter().map(|(id, name)| {
                            let selected = active.as_deref() == Some(id.as_str());
                            view! {
                                <option value=id.clone() selected=selected>{name}</option>
                            }
                        }).collect_view()
                    }}
                </select>
                <button
                    class="button button--ghost app-sidebar__new"
                    on:click=move |_| set_show_onboarding.set(true)
                >
                    {icon("plus")}
                    <span>"New establishment"</span>
                </button>
            </div>

            {groups.into_iter().map(|(group, items)| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let group_id_for_show = group_id.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |ids| {
                                    if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || {
                                    expanded_groups.get().contains(&group_id_for_exp)
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id_for_show)>
                            <div class="app-sidebar__children">
                                {items.iter().cloned().map(|(item, can_access)| {
                                    let item_key = StoredValue::new(item.key.to_string());
                                    view! {
                                        <Show when=move || can_access.get()>
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || {
                                                    let key = item_key.get_value();
                                                    ctx.active.get().as_deref() == Some(key.as_str())
                                                }
                                                on:click=move |_| {
                                                    ctx.open_tab(item.key, tab_label_for_key(item.key));
                                                }
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(item.icon)}
                                                    <span>{tab_label_for_key(item.key)}</span>
                                                </div>
                                            </div>
                                        </Show>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}

            <div class="app-sidebar__footer">
                <div
                    class="app-sidebar__item"
                    on:click=move |_| set_show_support.set(true)
                >
                    <div class="app-sidebar__item-content">
                        {icon("support")}
                        <span>"Support"</span>
                    </div>
                </div>
            </div>

            <Show when=move || show_onboarding.get()>
                <OnboardingWizard on_close=Callback::new(move |_| set_show_onboarding.set(false)) />
            </Show>
            <Show when=move || show_support.get()>
                <SupportDialog on_close=Callback::new(move |_| set_show_support.set(false)) />
            </Show>
        </div>
    }
}
