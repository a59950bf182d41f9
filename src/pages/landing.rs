//! The landing page: hero, style picker, selling points and the lead form.

use leptos::prelude::*;

use crate::components::draggable_styles::DraggableStyles;
use crate::components::lead_form::LeadForm;
use crate::components::navbar::Navbar;
use crate::components::particle_field::ParticleField;
use crate::components::reveal::Reveal;
use crate::components::stats_counter::StatsCounter;
use crate::components::style_cards::StyleCards;
use crate::util::scroll::{ScrollAlign, scroll_to_id};

const BENEFITS: [(&str, &str, &str); 4] = [
    ("⚡", "Быстро", "Готовый трек за несколько минут"),
    ("🎼", "Любой стиль", "От рока до саундтреков для кино"),
    ("✍️", "Свой текст", "Принесите слова или доверьте их нам"),
    ("🎁", "Уникально", "Каждая песня создаётся с нуля под вас"),
];

const STEPS: [(&str, &str); 3] = [
    ("Оставьте заявку", "Расскажите о стиле и настроении песни"),
    ("Мы создаём трек", "ИИ пишет музыку, мы доводим её до ума"),
    ("Получите песню", "Готовый файл придёт в Telegram или на почту"),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("Анна", "Подарила мужу песню на годовщину, он был в восторге!"),
    ("Дмитрий", "Трек для нашего подкаста получился лучше, чем ожидали."),
    ("Ольга", "Быстро, красиво и с душой. Закажу ещё."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div id="top" class="landing">
            <Navbar />

            <section class="hero">
                <ParticleField />
                <div class="hero-content">
                    <h1>"Песня в любом стиле за несколько минут"</h1>
                    <p class="hero-subtitle">"Нейросеть напишет музыку под ваш повод и настроение"</p>
                    <button class="btn btn-primary" on:click=move |_| scroll_to_id("contact", ScrollAlign::Center)>
                        "Заказать песню"
                    </button>
                    <StatsCounter />
                </div>
                <DraggableStyles />
            </section>

            <section id="styles" class="styles">
                <h2>"Выберите стиль"</h2>
                <StyleCards />
            </section>

            <section id="benefits" class="benefits">
                <h2>"Почему мы"</h2>
                <div class="benefit-grid">
                    {BENEFITS
                        .into_iter()
                        .map(|(icon, title, text)| {
                            view! {
                                <Reveal class="benefit-card">
                                    <span class="benefit-icon">{icon}</span>
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="how-it-works" class="steps">
                <h2>"Как это работает"</h2>
                <div class="step-list">
                    {STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(i, (title, text))| {
                            view! {
                                <Reveal class="step">
                                    <span class="step-number">{i + 1}</span>
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="testimonials">
                <h2>"Отзывы"</h2>
                <div class="testimonial-grid">
                    {TESTIMONIALS
                        .into_iter()
                        .map(|(author, quote)| {
                            view! {
                                <Reveal class="testimonial-card">
                                    <p class="quote">{quote}</p>
                                    <span class="author">{author}</span>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="contact" class="contact">
                <Reveal class="contact-card">
                    <h2>"Оставить заявку"</h2>
                    <LeadForm />
                </Reveal>
            </section>
        </div>
    }
}
