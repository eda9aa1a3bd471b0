//! Security package catalog.
//!
//! Each card shows the package image and falls back to a labeled
//! placeholder when the image cannot be loaded.

use leptos::*;

use crate::catalog::{placeholder_url, Product, PRODUCTS};
use crate::services::{go_to, Section};

#[component]
pub fn ProductCatalog(set_menu_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <section id="products" class="section products">
            <div class="section-header">
                <h2>"Biztonsági Csomagok"</h2>
                <p>"Előre összeállított megoldások Zigbee és vezetékes technológiával"</p>
            </div>

            <div class="product-grid">
                {PRODUCTS
                    .iter()
                    .map(|product| view! { <ProductCard product=*product set_menu_open=set_menu_open/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: Product, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <article id=product.anchor() class="product-card">
            <ProductImage product=product/>
            {product.badge.map(|badge| view! { <span class="product-badge">{badge}</span> })}
            <h3>{product.title}</h3>
            <p class="product-description">{product.description}</p>
            <ul class="product-features">
                {product
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li>
                            <span class="check">"✓"</span>
                            <span>{*feature}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <div class="product-footer">
                <div class="price">{product.price_range}</div>
                <button class="btn btn-primary" on:click=move |_| go_to(Section::Contact, set_menu_open)>
                    "Árajánlat kérése"
                </button>
            </div>
        </article>
    }
}

#[component]
fn ProductImage(product: Product) -> impl IntoView {
    let (load_failed, set_load_failed) = create_signal(false);

    let src = move || {
        if load_failed.get() {
            placeholder_url(product.title)
        } else {
            product.image_src()
        }
    };

    let on_error = move |_| {
        if !load_failed.get_untracked() {
            log::warn!("Image for package '{}' failed to load, using placeholder", product.id);
            set_load_failed.set(true);
        }
    };

    view! {
        <div class="product-image">
            <img src=src alt=product.title loading="lazy" on:error=on_error/>
        </div>
    }
}
