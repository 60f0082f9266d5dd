//! Preference submission and stored results.

use std::net::SocketAddr;

use axum::{
    extract::{rejection::FormRejection, ConnectInfo, Path, State},
    http::{Extensions, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use goatrank_common::{EraPreference, UserSession};
use goatrank_ranker::{Category, PreferenceVector, RankedPlayer};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::html::{escape, page};
use crate::service::rank_players;
use crate::state::SharedState;

/// Questionnaire submission. Weights are percentages totalling 100.
#[derive(Debug, Deserialize)]
pub struct PreferenceForm {
    pub offensive_weight: f64,
    pub defensive_weight: f64,
    pub team_success_weight: f64,
    pub longevity_weight: f64,
    pub efficiency_weight: f64,
    pub peak_performance_weight: f64,
    #[serde(default)]
    pub era_preference: Option<String>,
}

impl PreferenceForm {
    pub fn weights(&self) -> PreferenceVector {
        PreferenceVector::from_percentages([
            self.offensive_weight,
            self.defensive_weight,
            self.team_success_weight,
            self.longevity_weight,
            self.efficiency_weight,
            self.peak_performance_weight,
        ])
    }

    pub fn era(&self) -> EraPreference {
        self.era_preference
            .as_deref()
            .map(EraPreference::from_label)
            .unwrap_or_default()
    }
}

/// POST /submit_preferences
pub async fn submit_preferences(
    State(state): State<SharedState>,
    headers: HeaderMap,
    extensions: Extensions,
    form: Result<Form<PreferenceForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let Form(form) = form?;
    let weights = form.weights();
    let result = rank_players(&state, &weights, None, None).await?;

    let now = Utc::now();
    let session = UserSession {
        session_id: Uuid::new_v4(),
        offense_weight: result.weights.offense,
        defense_weight: result.weights.defense,
        team_success_weight: result.weights.team_success,
        longevity_weight: result.weights.longevity,
        efficiency_weight: result.weights.efficiency,
        peak_performance_weight: result.weights.peak_performance,
        era_preference: form.era(),
        ranked_players: serde_json::to_value(&result.players)?,
        ip_address: client_ip(&headers, &extensions),
        created_at: now,
        completed_at: Some(now),
    };
    state.sessions().insert(&session).await?;

    info!(session_id = %session.session_id, players = result.len(), "Preferences submitted");
    Ok(Redirect::to(&format!("/results/{}", session.session_id)))
}

/// Forwarded address first, then the socket peer.
fn client_ip(headers: &HeaderMap, extensions: &Extensions) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    forwarded.or_else(|| {
        extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
    })
}

/// GET /results/{session_id}
///
/// Unknown or malformed ids go back to the landing page.
pub async fn results(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Response, ApiError> {
    let Ok(id) = Uuid::parse_str(&session_id) else {
        return Ok(Redirect::to("/").into_response());
    };
    let Some(session) = state.sessions().find(id).await? else {
        warn!(session_id = %id, "Unknown session");
        return Ok(Redirect::to("/").into_response());
    };

    let players: Vec<RankedPlayer> = session.ranked_players()?;
    Ok(Html(render_results(&session, &players)).into_response())
}

fn render_results(session: &UserSession, players: &[RankedPlayer]) -> String {
    let weights = PreferenceVector::from_array([
        session.offense_weight,
        session.defense_weight,
        session.team_success_weight,
        session.longevity_weight,
        session.efficiency_weight,
        session.peak_performance_weight,
    ]);

    let weight_badges: String = Category::ALL
        .iter()
        .map(|c| {
            format!(
                r#"<span class="badge">{} {:.0}%</span>"#,
                escape(c.label()),
                weights.weight(*c) * 100.0
            )
        })
        .collect();

    let header_cells: String = Category::ALL
        .iter()
        .map(|c| format!("<th>{}</th>", escape(c.label())))
        .collect();

    let rows: String = if players.is_empty() {
        r#"<tr><td colspan="9" class="text-muted">No players ranked.</td></tr>"#.to_string()
    } else {
        players
            .iter()
            .map(|p| {
                let categories: String = Category::ALL
                    .iter()
                    .map(|c| format!("<td><code>{:.3}</code></td>", p.category_scores.get(*c)))
                    .collect();
                let bar = (p.composite_score * 100.0).round() as u32;
                format!(
                    r#"
            <tr>
                <td class="text-muted">{}</td>
                <td><a href="/api/player/{}">{}</a></td>
                <td>
                    <div class="progress"><div class="progress-bar" style="width:{}%"></div></div>
                    <code>{:.4}</code>
                </td>
                {}
            </tr>"#,
                    p.rank,
                    p.player_id,
                    escape(&p.name),
                    bar,
                    p.composite_score,
                    categories
                )
            })
            .collect()
    };

    let body = format!(
        r#"
    <div class="page-header">
        <h1 class="page-title">Your GOAT Ranking</h1>
        <p class="text-muted">Era preference: <strong>{}</strong> · built {}</p>
        <div class="weights">{}</div>
    </div>
    <div class="card">
        <table class="table">
            <thead>
                <tr><th>#</th><th>Player</th><th>Score</th>{}</tr>
            </thead>
            <tbody>{}</tbody>
        </table>
    </div>
    <a href="/questions" class="btn btn-primary">Try different weights</a>"#,
        session.era_preference.as_str(),
        session.created_at.format("%Y-%m-%d %H:%M UTC"),
        weight_badges,
        header_cells,
        rows
    );

    page("Results", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn form(p: [f64; 6]) -> PreferenceForm {
        PreferenceForm {
            offensive_weight: p[0],
            defensive_weight: p[1],
            team_success_weight: p[2],
            longevity_weight: p[3],
            efficiency_weight: p[4],
            peak_performance_weight: p[5],
            era_preference: Some("Modern".to_string()),
        }
    }

    #[test]
    fn test_form_percentages_become_fractions() {
        let w = form([40.0, 10.0, 20.0, 10.0, 10.0, 10.0]).weights();
        assert!((w.offense - 0.4).abs() < 1e-12);
        assert!(w.validate().is_ok());
        assert_eq!(form([0.0; 6]).era(), EraPreference::Modern);
    }

    #[test]
    fn test_client_ip_prefers_forwarded_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7, 10.0.0.1"));
        let mut ext = Extensions::new();
        ext.insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 5001))));
        assert_eq!(client_ip(&headers, &ext).as_deref(), Some("203.0.113.7"));
        assert_eq!(client_ip(&HeaderMap::new(), &ext).as_deref(), Some("127.0.0.1"));
        assert_eq!(client_ip(&HeaderMap::new(), &Extensions::new()), None);
    }
}
