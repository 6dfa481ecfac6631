use catalog_core::{
    view::{ProductRow, NO_MATCHING_MESSAGE},
    Catalog, EnrichedProduct, FilterAction, FilterState, User,
};
use leptos::*;

fn main() {
    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::error!("failed to load the built-in catalog: {}", err);
            return;
        }
    };
    for reference in catalog.unresolved_references() {
        logging::warn!("unresolved reference in catalog: {}", reference);
    }

    // the catalog is never modified and lives as long as the page
    let catalog: &'static Catalog = Box::leak(Box::new(catalog));
    let products: &'static [EnrichedProduct<'static>] =
        Box::leak(catalog.enriched_products().into_boxed_slice());

    mount_to_body(move || view! { <App users=catalog.users() products/> });
}

// Replaces the filter state with the result of applying the action to it.
fn dispatch(filter: RwSignal<FilterState>, action: FilterAction) {
    filter.update(|state| *state = std::mem::take(state).apply(action));
}

#[component]
fn App(users: &'static [User], products: &'static [EnrichedProduct<'static>]) -> impl IntoView {
    let filter = create_rw_signal(FilterState::new());
    // no tracing subscriber is installed in the browser, so the core's
    // debug!/trace! events are dropped; page-level logging goes through
    // leptos' console logger instead
    let visible = create_memo(move |_| {
        logging::log!("Recomputing visible products");
        filter.with(|state| state.filter(products))
    });

    view! {
        <div class="section">
            <div class="container">
                <h1 class="title">"Product Categories"</h1>
                <div class="block">
                    <nav class="panel">
                        <p class="panel-heading">"Filters"</p>
                        <UserTabs users filter/>
                        <SearchField filter/>
                        <div class="panel-block">
                            <a
                                href="#/"
                                class="button is-link is-outlined is-fullwidth"
                                on:click=move |_| dispatch(filter, FilterAction::ResetAll)
                            >
                                "Reset all filters"
                            </a>
                        </div>
                    </nav>
                </div>
                <ProductTable visible/>
            </div>
        </div>
    }
}

#[component]
fn UserTabs(users: &'static [User], filter: RwSignal<FilterState>) -> impl IntoView {
    let tabs = users
        .iter()
        .map(|user| {
            let id = user.id;
            let is_active = move || filter.with(|state| state.is_user_selected(id));
            view! {
                <a
                    href="#/"
                    class=("is-active", is_active)
                    on:click=move |_| dispatch(filter, FilterAction::ToggleUser(id))
                >
                    {user.name.as_str()}
                </a>
            }
        })
        .collect_view();

    view! { <p class="panel-tabs has-text-weight-bold">{tabs}</p> }
}

#[component]
fn SearchField(filter: RwSignal<FilterState>) -> impl IntoView {
    let search = move || filter.with(|state| state.search.clone());

    view! {
        <div class="panel-block">
            <p class="control has-icons-left has-icons-right">
                <input
                    type="text"
                    class="input"
                    placeholder="Search"
                    prop:value=search
                    on:input=move |ev| {
                        dispatch(filter, FilterAction::EditSearch(event_target_value(&ev)))
                    }
                />
                <span class="icon is-left">
                    <i class="fas fa-search" aria-hidden="true"></i>
                </span>
                <span class="icon is-right">
                    <Show when=move || filter.with(FilterState::has_search)>
                        <button
                            type="button"
                            class="delete"
                            on:click=move |_| dispatch(filter, FilterAction::ClearSearch)
                        ></button>
                    </Show>
                </span>
            </p>
        </div>
    }
}

#[component]
fn ProductTable(visible: Memo<Vec<EnrichedProduct<'static>>>) -> impl IntoView {
    view! {
        <div class="box table-container">
            <Show when=move || visible.with(Vec::is_empty)>
                <p>{NO_MATCHING_MESSAGE}</p>
            </Show>
            <table class="table is-striped is-narrow is-fullwidth">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Product"</th>
                        <th>"Category"</th>
                        <th>"User"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible.get()
                        key=|product| product.id()
                        let:product
                    >
                        <ProductTableRow row=ProductRow::from(product)/>
                    </For>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ProductTableRow(row: ProductRow<'static>) -> impl IntoView {
    let category = row.category_label();

    view! {
        <tr>
            <td class="has-text-weight-bold">{row.id.0}</td>
            <td>{row.name}</td>
            <td>{category}</td>
            <td class=row.highlight.css_class()>{row.user_name}</td>
        </tr>
    }
}
