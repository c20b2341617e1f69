//! Organization report.
//!
//! Composes the analytics of one organization over a date window into a
//! single serializable value: raw-mode averages, a de-duplicated rank
//! summary, attribute cohorts, the monthly trend, rank changes, respondent
//! growth and the gated narrative context.

use serde::{Deserialize, Serialize};

use crate::analytics::{
    aggregate, cohort_growth_rate, filter_by_attributes, insight_context, latest_per_respondent,
    monthly_trend, rank_change_stats, rank_changes, respondent_growth, AttributeFilter,
    AttributeKind, AttributeQuestions, ByOrganization, CohortAggregate, DateWindow, DedupMode,
    Insight, MonthlyTrendPoint, RankChangeRecord, RankChangeStats, RankSummary, RespondentGrowth,
    SampleSettings, ScoredResponse,
};
use crate::analytics::cohort::count_u32;
use crate::config::{Config, DEFAULT_MIN_REQUIRED_RESPONDENTS};
use crate::survey::{Survey, SurveyResponse};
use crate::taxonomy::RankDefinition;

/// What a report covers and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Responses outside the window are ignored.
    pub window: DateWindow,
    /// Organization member count, for the response rate.
    pub member_count: Option<u32>,
    /// Department / position constraints.
    pub attribute_filter: AttributeFilter,
    /// Free-text sampling.
    pub samples: SampleSettings,
    /// Responses needed before narrative context is produced.
    pub min_required_respondents: u32,
    /// Display name for the narrative context; defaults to the org id.
    pub subject: Option<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            window: DateWindow::all(),
            member_count: None,
            attribute_filter: AttributeFilter::default(),
            samples: SampleSettings::default(),
            min_required_respondents: DEFAULT_MIN_REQUIRED_RESPONDENTS,
            subject: None,
        }
    }
}

impl ReportOptions {
    /// Options carrying the sampling and gating settings of a config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            samples: SampleSettings::from(config),
            min_required_respondents: config.min_required_respondents,
            ..Self::default()
        }
    }

    /// Restrict to a window.
    #[must_use]
    pub const fn with_window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }

    /// Set the member count.
    #[must_use]
    pub const fn with_member_count(mut self, member_count: Option<u32>) -> Self {
        self.member_count = member_count;
        self
    }

    /// Set attribute constraints.
    #[must_use]
    pub fn with_attribute_filter(mut self, filter: AttributeFilter) -> Self {
        self.attribute_filter = filter;
        self
    }

    /// Set the narrative subject name.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

/// Everything the dashboards show about one organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationReport {
    /// Organization.
    pub org_id: String,
    /// Window the report covers.
    pub window: DateWindow,
    /// Responses in scope.
    pub total_responses: u32,
    /// Mean over every response; `None` without responses.
    pub average: Option<CohortAggregate>,
    /// Ranks of the latest response per respondent.
    pub rank_summary: RankSummary,
    /// Department cohorts, latest response per respondent.
    pub departments: Vec<CohortAggregate>,
    /// Position cohorts, latest response per respondent.
    pub positions: Vec<CohortAggregate>,
    /// Month-by-month scores.
    pub monthly_trend: Vec<MonthlyTrendPoint>,
    /// Growth across the monthly trend.
    pub cohort_growth_rate: Option<f64>,
    /// Rank change per respondent, newest first.
    pub rank_changes: Vec<RankChangeRecord>,
    /// UP / MAINTAIN / DOWN counts.
    pub rank_change_stats: RankChangeStats,
    /// Score growth per respondent.
    pub respondent_growth: Vec<RespondentGrowth>,
    /// Narrative context or insufficient-data marker.
    pub insight: Insight,
}

/// Build the report of `org_id`.
///
/// `responses` may contain other organizations; they are ignored. `surveys`
/// is only used to detect attribute questions.
#[must_use]
pub fn build_organization_report(
    org_id: &str,
    responses: &[SurveyResponse],
    surveys: &[Survey],
    definition: &RankDefinition,
    options: &ReportOptions,
) -> OrganizationReport {
    let attributes = AttributeQuestions::detect(surveys);
    let in_window: Vec<&SurveyResponse> = responses
        .iter()
        .filter(|r| r.org_id == org_id && options.window.contains(r.submitted_at))
        .collect();
    let scoped = filter_by_attributes(in_window, &attributes, &options.attribute_filter);

    tracing::debug!(org_id, responses = scoped.len(), "Building organization report");

    let average = aggregate(
        scoped.iter().copied(),
        &ByOrganization,
        definition,
        DedupMode::AllResponses,
    )
    .remove(org_id);

    let latest_ranks = latest_per_respondent(scoped.iter().copied())
        .into_iter()
        .map(|r| ScoredResponse::new(r, definition).assessment.rank);
    let rank_summary = RankSummary::new(latest_ranks, options.member_count);

    let cohorts = |kind: AttributeKind| -> Vec<CohortAggregate> {
        aggregate(
            scoped.iter().copied(),
            &attributes.extractor(kind),
            definition,
            DedupMode::LatestPerRespondent,
        )
        .into_values()
        .collect()
    };

    let trend = monthly_trend(scoped.iter().copied(), &DateWindow::all(), definition);
    let changes = rank_changes(scoped.iter().copied(), definition);
    let subject = options.subject.as_deref().unwrap_or(org_id);

    let report = OrganizationReport {
        org_id: org_id.to_string(),
        window: options.window,
        total_responses: count_u32(scoped.len()),
        average,
        rank_summary,
        departments: cohorts(AttributeKind::Department),
        positions: cohorts(AttributeKind::Position),
        cohort_growth_rate: cohort_growth_rate(&trend),
        monthly_trend: trend,
        rank_change_stats: rank_change_stats(&changes),
        rank_changes: changes,
        respondent_growth: respondent_growth(
            scoped.iter().copied(),
            &DateWindow::all(),
            definition,
        ),
        insight: insight_context(
            subject,
            &scoped,
            definition,
            options.samples,
            options.min_required_respondents,
        ),
    };

    tracing::info!(
        org_id,
        responses = report.total_responses,
        respondents = report.rank_summary.respondent_count,
        "Built organization report"
    );
    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::analytics::ChangeType;
    use crate::test_utils::{
        at, empty_response, high_response, low_response, test_survey, with_attributes,
    };
    use pretty_assertions::assert_eq;

    fn responses() -> Vec<SurveyResponse> {
        let mut other_org = high_response("Z", at(2024, 1, 5));
        other_org.org_id = "org-2".to_string();
        vec![
            with_attributes(low_response("A", at(2024, 1, 10)), "sales", "staff"),
            with_attributes(high_response("A", at(2024, 2, 10)), "sales", "staff"),
            with_attributes(high_response("B", at(2024, 1, 20)), "eng", "manager"),
            with_attributes(empty_response("C", at(2024, 2, 20)), "eng", "staff"),
            other_org,
        ]
    }

    fn build(options: &ReportOptions) -> OrganizationReport {
        build_organization_report(
            "org-1",
            &responses(),
            &[test_survey()],
            &RankDefinition::system_default("org-1"),
            options,
        )
    }

    #[test]
    fn test_report_sections() {
        let report = build(&ReportOptions::default().with_member_count(Some(4)));

        assert_eq!(report.org_id, "org-1");
        assert_eq!(report.total_responses, 4);
        assert_eq!(report.average.as_ref().unwrap().response_count, 4);
        assert_eq!(report.rank_summary.respondent_count, 3);
        assert_eq!(report.rank_summary.response_rate, Some(75));

        let departments: Vec<_> = report
            .departments
            .iter()
            .map(|c| c.scope_key.as_str())
            .collect();
        assert_eq!(departments, ["Engineering", "Sales"]);
        assert_eq!(report.positions.len(), 2);

        let months: Vec<_> = report.monthly_trend.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, ["2024-01", "2024-02"]);

        assert_eq!(report.rank_changes.len(), 3);
        assert_eq!(report.rank_change_stats.up, 1);
        let a = report
            .rank_changes
            .iter()
            .find(|r| r.respondent_name == "A")
            .unwrap();
        assert_eq!(a.change_type, ChangeType::Up);

        assert_eq!(report.respondent_growth[0].respondent_name, "A");
        assert_eq!(report.respondent_growth[0].growth_rate, Some(77.1));
        assert!(matches!(
            report.insight,
            Insight::InsufficientData {
                current: 4,
                required: 5
            }
        ));
    }

    #[test]
    fn test_report_window_and_filter() {
        let options = ReportOptions::default()
            .with_window(DateWindow::from_months(Some("2024-02"), Some("2024-02")).unwrap())
            .with_attribute_filter(AttributeFilter {
                department: Some("Sales".to_string()),
                position: None,
            });
        let report = build(&options);
        assert_eq!(report.total_responses, 1);
        assert_eq!(report.rank_changes[0].change_type, ChangeType::New);
        assert_eq!(report.respondent_growth[0].growth_rate, None);
    }

    #[test]
    fn test_report_insight_ready_with_lower_minimum() {
        let mut options = ReportOptions::default().with_subject("Acme Inc.");
        options.min_required_respondents = 2;
        let report = build(&options);
        let context = report.insight.context().unwrap();
        assert_eq!(context.subject, "Acme Inc.");
        assert_eq!(context.aggregation.as_ref().unwrap().total_respondents, 4);
    }

    #[test]
    fn test_report_for_unknown_org_is_empty() {
        let report = build_organization_report(
            "nobody",
            &responses(),
            &[],
            &RankDefinition::system_default("nobody"),
            &ReportOptions::default(),
        );
        assert_eq!(report.total_responses, 0);
        assert!(report.average.is_none());
        assert_eq!(report.rank_summary.average_rank, None);
        assert!(report.monthly_trend.is_empty());
        assert_eq!(report.cohort_growth_rate, None);
    }

    #[test]
    fn test_report_json_is_camel_case() {
        let report = build(&ReportOptions::default());
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("rankSummary").is_some());
        assert!(value.get("monthlyTrend").is_some());
        assert_eq!(value["insight"]["status"], "insufficientData");
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            min_required_respondents: 12,
            text_sample_limit: 3,
            ..Config::default()
        };
        let options = ReportOptions::from_config(&config);
        assert_eq!(options.min_required_respondents, 12);
        assert_eq!(options.samples.limit, 3);
        assert_eq!(options.window, DateWindow::all());
    }
}
