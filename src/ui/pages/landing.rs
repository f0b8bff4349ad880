//! Landing page component
//!
//! A single scrolling page presenting the three products:
//! - Reading-progress bar pinned to the top
//! - Hero section that animates in on load
//! - One parallax section per product with staggered reveals
//! - Footer call to action

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::Entrance;
use crate::core::content::{FOOTER, HERO, PAGE_DESCRIPTION, PAGE_TITLE, PRODUCTS, Product};
use crate::ui::common::LinkButton;
use crate::ui::icon::{Icon, icons};
use crate::ui::page_style::use_page_style_override;
use crate::ui::parallax::ParallaxSection;
use crate::ui::progress_bar::ScrollProgressBar;
use crate::ui::reveal::{AnimatedButton, AnimatedDescription, AnimatedTitle, Reveal};

/// Landing page component with scroll-driven animations
#[component]
pub fn LandingPage() -> impl IntoView {
    use_page_style_override();

    view! {
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />

        <div class="relative text-gray-100">
            <ScrollProgressBar />

            <HeroSection />

            {PRODUCTS
                .into_iter()
                .map(|product| view! { <ProductSection product=product /> })
                .collect_view()}

            <Footer />
        </div>
    }
}

/// Opening section; visible at load, so it animates on mount.
#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <ParallaxSection background=HERO.background>
            <div class="text-center p-8">
                <Reveal entrance=Entrance::HERO_HEADLINE immediate=true>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 text-gray-100">
                        {HERO.headline}
                    </h1>
                </Reveal>
                <Reveal entrance=Entrance::HERO_SUBTITLE immediate=true>
                    <p class="text-xl md:text-2xl mb-12 text-gray-300">{HERO.subtitle}</p>
                </Reveal>
                <Reveal entrance=Entrance::HERO_SCROLL_HINT immediate=true>
                    // Bounce lives on an inner element so it does not fight the entrance transform
                    <div class="animate-bounce">
                        <Icon name=icons::ARROW_DOWN class="mx-auto h-8 w-8" />
                    </div>
                </Reveal>
            </div>
        </ParallaxSection>
    }
}

#[component]
fn ProductSection(product: Product) -> impl IntoView {
    view! {
        <ParallaxSection background=product.background>
            <div class="text-center p-8">
                <AnimatedTitle text=product.title />
                <AnimatedDescription text=product.description />
                <AnimatedButton href=product.href label=product.cta_label />
            </div>
        </ParallaxSection>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-100 py-12">
            <div class="container mx-auto px-4 text-center">
                <h2 class="text-3xl font-bold mb-4">{FOOTER.heading}</h2>
                <p class="text-xl mb-8 text-gray-300">{FOOTER.body}</p>
                <LinkButton href=FOOTER.href>{FOOTER.label}</LinkButton>
            </div>
        </footer>
    }
}
