//! End-to-end tests of the load -> derive -> rank -> table pipeline.
//!
//! These go through the public library API the way the dashboard does: a CSV
//! on disk, a background load task and reducer transitions.

use reel_insights::data::{LoadTask, ReelLoader, RowIssue};
use reel_insights::metrics::{Metric, SortOrder, ROWS_PER_PAGE, TOP_N};
use reel_insights::state::{Action, DashboardState, LoadPhase};
use std::io::Write;
use std::time::Duration;

fn write_csv(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn export_with(rows: usize) -> String {
    let mut csv = String::from("Reel,Views,Likes,Comments,Posted\n");
    for i in 1..=rows {
        let views = 1_000 + (i * 7_919) % 50_000;
        let likes = (i * 131) % 900;
        let comments = (i * 17) % 120;
        csv.push_str(&format!(
            "https://www.instagram.com/reel/Rx{i:04}q/?igsh=abc,{views},{likes},{comments},2024-01-{:02}\n",
            i % 28 + 1
        ));
    }
    csv
}

fn load_state(csv: &str) -> DashboardState {
    let file = write_csv(csv);
    let task = LoadTask::spawn(file.path().to_path_buf());
    let outcome = task.wait(Duration::from_secs(10)).expect("load finished");
    DashboardState::default()
        .reduce(Action::LoadStarted)
        .reduce(Action::LoadFinished(outcome))
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn reference_row_derives_expected_scores() {
    let state = load_state("Reel,Views,Likes,Comments\nhttps://x/y/aaa111,1000,100,10\n");
    assert_eq!(state.phase(), &LoadPhase::Ready);

    let reel = &state.reels()[0];
    assert_eq!(reel.id, 1);
    assert_eq!(reel.short_url, "y");
    assert!((reel.engagement_rate - 11.0).abs() < 1e-9);
    assert!((reel.engagement_score - 13.0).abs() < 1e-9);
    assert!((reel.viral_coefficient - 0.33).abs() < 1e-9);
}

#[test]
fn extra_columns_pass_through() {
    let state = load_state(&export_with(3));
    let reel = &state.reels()[0];
    assert_eq!(reel.extra.len(), 1);
    assert_eq!(reel.extra[0].0, "Posted");
    assert_eq!(reel.extra[0].1, "2024-01-02");
}

#[test]
fn invalid_rows_are_reported_and_skipped() {
    let csv = "Reel,Views,Likes,Comments\n\
               https://x/a/ok1,100,10,1\n\
               https://x/b/zero,0,10,1\n\
               ,100,10,1\n\
               https://x/c/ok2,200,10,1\n";
    let dataset = ReelLoader::parse_csv(csv).unwrap();
    assert_eq!(dataset.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 4]);
    assert_eq!(dataset.rejected.len(), 2);
    assert_eq!(dataset.rejected[0].issue, RowIssue::ZeroViews);
    assert_eq!(dataset.rejected[1].issue, RowIssue::MissingReel);

    let state = DashboardState::default().reduce(Action::LoadFinished(Ok(dataset)));
    assert!(state.reels().iter().all(|r| r.engagement_rate.is_finite()));
    assert_eq!(state.rejected().len(), 2);
}

#[test]
fn missing_file_moves_to_failed_with_empty_summary() {
    let task = LoadTask::spawn("/nonexistent/reels.csv".into());
    let outcome = task.wait(Duration::from_secs(10)).expect("load finished");
    let state = DashboardState::default().reduce(Action::LoadFinished(outcome));

    assert!(matches!(state.phase(), LoadPhase::Failed(_)));
    let summary = state.summary();
    assert_eq!(summary.total_views, 0);
    assert_eq!(summary.total_likes, 0);
    assert_eq!(summary.total_comments, 0);
    assert!(summary.avg_engagement_rate.is_nan());
    assert_eq!(state.table_view().page_count, 0);
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[test]
fn top_list_follows_active_metric() {
    let mut state = load_state(&export_with(40));

    for metric in Metric::ALL {
        state = state.reduce(Action::SetMetric(metric));
        let top = state.top_reels();
        assert_eq!(top.len(), TOP_N);
        assert!(top
            .windows(2)
            .all(|w| metric.value(w[0].reel) >= metric.value(w[1].reel)));

        let best = state
            .reels()
            .iter()
            .map(|r| metric.value(r))
            .fold(f64::MIN, f64::max);
        assert_eq!(metric.value(top[0].reel), best);
        assert_eq!(top[0].display_url.chars().count(), 5);
    }
}

#[test]
fn small_dataset_top_list_has_every_record() {
    let state = load_state(&export_with(4));
    assert_eq!(state.top_reels().len(), 4);
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

#[test]
fn unique_short_url_filter_finds_one_record() {
    let state = load_state(&export_with(40)).reduce(Action::SetFilter("RX0023Q".into()));
    let view = state.table_view();
    assert_eq!(view.filtered_count, 1);
    assert_eq!(view.rows[0].short_url, "Rx0023q");
}

#[test]
fn paging_through_filtered_results() {
    let mut state = load_state(&export_with(37));
    let view = state.table_view();
    assert_eq!(view.page_count, 4);
    assert_eq!(view.rows.len(), ROWS_PER_PAGE);

    for _ in 0..10 {
        state = state.reduce(Action::NextPage);
    }
    let view = state.table_view();
    assert_eq!(view.page, 4);
    assert_eq!(view.rows.len(), 7);
    assert!(!view.has_next());

    state = state.reduce(Action::SetSortOrder(SortOrder::Asc));
    let rows = state.table_rows();
    assert!(rows
        .windows(2)
        .all(|w| w[0].engagement_rate <= w[1].engagement_rate));
}

#[test]
fn blank_lines_are_ignored() {
    let state = load_state("Reel,Views,Likes,Comments\n\nhttps://x/a/b,10,1,1\n\n\nhttps://x/c/d,20,1,1\n\n");
    assert_eq!(state.reels().len(), 2);
    assert_eq!(state.reels()[1].id, 2);
}
