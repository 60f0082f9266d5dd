//! Landing page and preference questionnaire.

use axum::{extract::State, response::Html};
use goatrank_ranker::Category;
use tracing::warn;

use crate::html::{escape, page};
use crate::state::SharedState;

/// Slider defaults in percent, in `Category::ALL` order. They total 100.
const DEFAULT_PERCENTAGES: [u32; 6] = [20, 15, 20, 15, 15, 15];

/// GET /
pub async fn home(State(state): State<SharedState>) -> Html<String> {
    let stats = match state.db.stats().await {
        Ok(stats) => stats,
        Err(e) => {
            warn!(error = %e, "Failed to read database stats");
            Default::default()
        }
    };

    let body = format!(
        r#"
    <section class="hero">
        <h1>Who is the greatest of all time?</h1>
        <p class="lead">Tell us what greatness means to you and we will rank
           {} players by your definition.</p>
        <a href="/questions" class="btn btn-primary">Build my ranking</a>
    </section>
    <section class="stats">
        <div class="stat"><span class="stat-value">{}</span> players</div>
        <div class="stat"><span class="stat-value">{}</span> rankings built</div>
    </section>"#,
        stats.with_career_stats, stats.players, stats.sessions
    );

    Html(page("Home", &body))
}

/// GET /questions
pub async fn questions() -> Html<String> {
    let sliders: String = Category::ALL
        .iter()
        .zip(DEFAULT_PERCENTAGES)
        .map(|(category, pct)| {
            let field = form_field(*category);
            format!(
                r#"
        <div class="slider-row">
            <label for="{field}">{label}</label>
            <input type="range" id="{field}" name="{field}" min="0" max="100" step="1"
                   value="{pct}" oninput="updateTotal()">
            <output id="{field}_out">{pct}</output>%
        </div>"#,
                field = field,
                label = escape(category.label()),
                pct = pct,
            )
        })
        .collect();

    let body = format!(
        r#"
    <h1 class="page-title">What makes a player great?</h1>
    <p class="text-muted">Split 100 points across the six categories.</p>
    <form method="post" action="/submit_preferences" class="card">
        {sliders}
        <div class="slider-row">
            <label for="era_preference">Era</label>
            <select id="era_preference" name="era_preference">
                <option value="any" selected>Any era</option>
                <option value="modern">Modern</option>
                <option value="classic">Classic</option>
            </select>
        </div>
        <p>Total: <strong id="total">100</strong>%</p>
        <button type="submit" class="btn btn-primary">Rank the players</button>
    </form>
    <script>
    function updateTotal() {{
        let total = 0;
        document.querySelectorAll('input[type=range]').forEach(function (el) {{
            document.getElementById(el.id + '_out').textContent = el.value;
            total += parseInt(el.value, 10);
        }});
        document.getElementById('total').textContent = total;
    }}
    </script>"#
    );

    Html(page("Your Preferences", &body))
}

/// Form field name for a category's slider.
pub fn form_field(category: Category) -> &'static str {
    match category {
        Category::Offense         => "offensive_weight",
        Category::Defense         => "defensive_weight",
        Category::TeamSuccess     => "team_success_weight",
        Category::Longevity       => "longevity_weight",
        Category::Efficiency      => "efficiency_weight",
        Category::PeakPerformance => "peak_performance_weight",
    }
}
