//! Dashboard State
//! All view state lives in one struct; every user action is one transition.

use crate::data::{LoadOutcome, RejectedRow};
use crate::metrics::table::{self, TableQuery, TableView, ROWS_PER_PAGE};
use crate::metrics::{top_n, Metric, MetricDeriver, RankedReel, Reel, SortOrder, TOP_N};
use crate::stats::DatasetSummary;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// State transitions, one per user or loader event.
#[derive(Debug)]
pub enum Action {
    LoadStarted,
    LoadFinished(LoadOutcome),
    SetMetric(Metric),
    SetSortOrder(SortOrder),
    SetFilter(String),
    NextPage,
    PreviousPage,
    Select(usize),
    ClearSelection,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    phase: LoadPhase,
    source: Option<PathBuf>,
    reels: Vec<Reel>,
    rejected: Vec<RejectedRow>,
    query: TableQuery,
    selected: Option<usize>,
}

impl DashboardState {
    pub fn new(metric: Metric, order: SortOrder) -> Self {
        Self {
            query: TableQuery {
                metric,
                order,
                ..TableQuery::default()
            },
            ..Self::default()
        }
    }

    /// Apply one action and return the next state.
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::LoadStarted => {
                self.phase = LoadPhase::Loading;
                self.reels.clear();
                self.rejected.clear();
                self.selected = None;
            }
            Action::LoadFinished(Ok(dataset)) => {
                self.reels = MetricDeriver::derive_all(dataset.rows);
                self.rejected = dataset.rejected;
                self.source = dataset.source;
                self.phase = LoadPhase::Ready;
                self.query.page = 1;
                self.selected = None;
            }
            Action::LoadFinished(Err(err)) => {
                self.reels.clear();
                self.rejected.clear();
                self.source = None;
                self.phase = LoadPhase::Failed(err.to_string());
                self.query.page = 1;
                self.selected = None;
            }
            Action::SetMetric(metric) => self.query.metric = metric,
            Action::SetSortOrder(order) => self.query.order = order,
            Action::SetFilter(filter) => {
                self.query.filter = filter;
                self.query.page = 1;
            }
            Action::NextPage => {
                let total = self.filtered_count();
                let page = table::clamp_page(self.query.page, total);
                self.query.page = if page * ROWS_PER_PAGE < total {
                    page + 1
                } else {
                    page
                };
            }
            Action::PreviousPage => {
                let page = table::clamp_page(self.query.page, self.filtered_count());
                self.query.page = page.saturating_sub(1).max(1);
            }
            Action::Select(id) => {
                if self.reels.iter().any(|r| r.id == id) {
                    self.selected = Some(id);
                }
            }
            Action::ClearSelection => self.selected = None,
        }
        self
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }

    pub fn reels(&self) -> &[Reel] {
        &self.reels
    }

    pub fn rejected(&self) -> &[RejectedRow] {
        &self.rejected
    }

    pub fn query(&self) -> &TableQuery {
        &self.query
    }

    pub fn metric(&self) -> Metric {
        self.query.metric
    }

    /// Top entries for the charts under the active metric.
    pub fn top_reels(&self) -> Vec<RankedReel<'_>> {
        top_n(&self.reels, self.query.metric, TOP_N)
    }

    /// Current page of the table.
    pub fn table_view(&self) -> TableView<'_> {
        table::build_view(&self.reels, &self.query)
    }

    /// Every row matching the filter, in table order.
    pub fn table_rows(&self) -> Vec<&Reel> {
        table::filtered_sorted(&self.reels, &self.query)
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary::compute(&self.reels)
    }

    pub fn selected(&self) -> Option<&Reel> {
        let id = self.selected?;
        self.reels.iter().find(|r| r.id == id)
    }

    fn filtered_count(&self) -> usize {
        table::filter_reels(&self.reels, &self.query.filter).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LoadError, ReelLoader};

    fn loaded(rows: usize) -> DashboardState {
        let mut csv = String::from("Reel,Views,Likes,Comments\n");
        for i in 1..=rows {
            csv.push_str(&format!(
                "https://www.instagram.com/reel/R{i:03}/?igsh=x,{},{},{}\n",
                100 * i,
                i,
                i % 5
            ));
        }
        DashboardState::default()
            .reduce(Action::LoadStarted)
            .reduce(Action::LoadFinished(ReelLoader::parse_csv(&csv)))
    }

    #[test]
    fn starts_loading_then_ready() {
        let state = DashboardState::default();
        assert!(state.is_loading());

        let state = loaded(3);
        assert_eq!(state.phase(), &LoadPhase::Ready);
        assert_eq!(state.reels().len(), 3);
    }

    #[test]
    fn failure_is_explicit() {
        let state = DashboardState::default().reduce(Action::LoadFinished(Err(
            LoadError::MissingColumn("Views"),
        )));
        assert!(matches!(state.phase(), LoadPhase::Failed(msg) if msg.contains("Views")));
        assert!(state.reels().is_empty());
        assert_eq!(state.summary().total_views, 0);
        assert!(state.top_reels().is_empty());
    }

    #[test]
    fn failed_reload_forgets_previous_source() {
        let mut dataset =
            ReelLoader::parse_csv("Reel,Views,Likes,Comments\nhttps://x/a/b,10,1,1\n").unwrap();
        dataset.source = Some(PathBuf::from("first.csv"));
        let state = DashboardState::default().reduce(Action::LoadFinished(Ok(dataset)));
        assert_eq!(state.source(), Some(&PathBuf::from("first.csv")));

        let state = state
            .reduce(Action::LoadStarted)
            .reduce(Action::LoadFinished(Err(LoadError::MissingColumn("Views"))));
        assert!(state.source().is_none());
    }

    #[test]
    fn paging_stops_at_bounds() {
        let mut state = loaded(25);
        state = state.reduce(Action::PreviousPage);
        assert_eq!(state.query().page, 1);

        state = state.reduce(Action::NextPage).reduce(Action::NextPage);
        assert_eq!(state.query().page, 3);
        assert_eq!(state.table_view().rows.len(), 5);

        state = state.reduce(Action::NextPage);
        assert_eq!(state.query().page, 3);

        state = state.reduce(Action::PreviousPage);
        assert_eq!(state.query().page, 2);
    }

    #[test]
    fn filter_change_resets_page() {
        let state = loaded(25)
            .reduce(Action::NextPage)
            .reduce(Action::SetFilter("r01".into()));
        assert_eq!(state.query().page, 1);
        // R010 ..= R019
        assert_eq!(state.table_view().filtered_count, 10);
    }

    #[test]
    fn metric_switch_reorders_top_list() {
        let state = loaded(12).reduce(Action::SetMetric(Metric::Views));
        let top = state.top_reels();
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].reel.id, 12);

        let state = state.reduce(Action::SetSortOrder(SortOrder::Asc));
        assert_eq!(state.table_view().rows[0].id, 1);
    }

    #[test]
    fn selection_replaces_and_clears() {
        let state = loaded(5).reduce(Action::Select(2));
        assert_eq!(state.selected().map(|r| r.id), Some(2));

        let state = state.reduce(Action::Select(4));
        assert_eq!(state.selected().map(|r| r.id), Some(4));

        let state = state.reduce(Action::Select(99));
        assert_eq!(state.selected().map(|r| r.id), Some(4));

        let state = state.reduce(Action::ClearSelection);
        assert!(state.selected().is_none());
    }

    #[test]
    fn reload_clears_previous_data() {
        let state = loaded(5).reduce(Action::Select(1)).reduce(Action::LoadStarted);
        assert!(state.is_loading());
        assert!(state.reels().is_empty());
        assert!(state.selected().is_none());
    }
}
