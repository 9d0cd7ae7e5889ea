//! State machine and chart properties over a small census file.

use scatterswitch::chart::{Chart, ChartEvent, RenderCommand};
use scatterswitch::config::ChartConfig;
use scatterswitch::data::{DataReader, DataSet, XField};
use std::time::{Duration, Instant};

const CSV: &str = "\
state,abbr,poverty,age,income,healthcare,obesity,smokes
A,AA,10,30,50000,5,20,10
B,BB,20,40,70000,15,25,12
C,CC,14.5,38.2,61000,9.1,30,18
";

const SECOND: Duration = Duration::from_secs(1);

fn dataset() -> DataSet {
    DataReader::from_reader(CSV.as_bytes()).unwrap()
}

fn two_states() -> DataSet {
    let text = "\
state,abbr,poverty,age,income,healthcare
A,AA,10,30,50000,5
B,BB,20,40,70000,15
";
    DataReader::from_reader(text.as_bytes()).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_domain_is_padded_extent_for_every_field() {
    let ds = dataset();
    let now = Instant::now();
    for field in XField::ALL {
        let chart = Chart::new(ds.clone(), ChartConfig::default(), field, now).unwrap();
        let (min, max) = ds.extent(field);
        let (lo, hi) = chart.scale().domain();
        assert!(close(lo, 0.8 * min), "{field}: {lo} vs {}", 0.8 * min);
        assert!(close(hi, 1.2 * max), "{field}: {hi} vs {}", 1.2 * max);
    }
}

#[test]
fn test_two_record_example() {
    let now = Instant::now();
    let mut chart = Chart::new(two_states(), ChartConfig::default(), XField::Poverty, now).unwrap();
    let (lo, hi) = chart.scale().domain();
    assert!(close(lo, 8.0) && close(hi, 24.0));

    assert!(chart.select(XField::Age, now));
    let age = chart.scale();
    let (lo, hi) = age.domain();
    assert!(close(lo, 24.0) && close(hi, 48.0));

    let b = chart.view().marks.get(1).unwrap();
    assert_eq!(b.datum().state, "B");
    assert!(close(b.target_cx(), age.apply(40.0)));
    assert_eq!(chart.view().labels.active(), Some(XField::Age));
}

#[test]
fn test_clicking_active_label_changes_nothing() {
    let now = Instant::now();
    let mut chart = Chart::new(dataset(), ChartConfig::default(), XField::Age, now).unwrap();
    let scale = chart.scale();
    let xs: Vec<f64> = chart.view().marks.iter().map(|m| m.cx_at(now)).collect();

    assert!(!chart.select(XField::Age, now + SECOND));
    assert_eq!(chart.scale(), scale);
    assert!(!chart.is_animating(now + SECOND));
    let after: Vec<f64> = chart.view().marks.iter().map(|m| m.cx_at(now + SECOND)).collect();
    assert_eq!(after, xs);
    assert_eq!(chart.view().labels.active(), Some(XField::Age));
}

#[test]
fn test_unknown_identifier_is_ignored() {
    let now = Instant::now();
    let mut chart = Chart::new(dataset(), ChartConfig::default(), XField::Poverty, now).unwrap();
    let scale = chart.scale();
    assert!(!chart.dispatch(&ChartEvent::LabelClicked("smokes".into()), now));
    assert_eq!(chart.active(), XField::Poverty);
    assert_eq!(chart.scale(), scale);
}

#[test]
fn test_exactly_one_active_label_after_each_transition() {
    let now = Instant::now();
    let mut chart = Chart::new(dataset(), ChartConfig::default(), XField::Poverty, now).unwrap();
    let sequence = [XField::Income, XField::Age, XField::Poverty, XField::Income];
    for (i, field) in sequence.into_iter().enumerate() {
        chart.select(field, now + SECOND * i as u32);
        let active: Vec<XField> = chart
            .view()
            .labels
            .iter()
            .filter(|l| l.active)
            .map(|l| l.field)
            .collect();
        assert_eq!(active, vec![field]);
    }
}

#[test]
fn test_marks_settle_on_new_scale() {
    let now = Instant::now();
    let mut chart = Chart::new(dataset(), ChartConfig::default(), XField::Poverty, now).unwrap();
    chart.select(XField::Income, now);
    let settled = now + SECOND;
    let income = chart.scale();
    for mark in chart.view().marks.iter() {
        assert!(close(mark.cx_at(settled), income.apply(mark.datum().income)));
    }
    assert!(!chart.is_animating(settled));
}

#[test]
fn test_round_trip_restores_positions() {
    let now = Instant::now();
    let mut chart = Chart::new(dataset(), ChartConfig::default(), XField::Poverty, now).unwrap();
    let scale = chart.scale();
    let xs: Vec<f64> = chart.view().marks.iter().map(|m| m.cx_at(now)).collect();

    chart.select(XField::Age, now);
    chart.select(XField::Poverty, now + SECOND * 2);

    let settled = now + SECOND * 4;
    assert_eq!(chart.scale(), scale);
    let after: Vec<f64> = chart.view().marks.iter().map(|m| m.cx_at(settled)).collect();
    for (a, b) in xs.iter().zip(&after) {
        assert!(close(*a, *b));
    }
}

#[test]
fn test_vertical_positions_never_move() {
    let now = Instant::now();
    let mut chart = Chart::new(dataset(), ChartConfig::default(), XField::Poverty, now).unwrap();
    let ys: Vec<f64> = chart.view().marks.iter().map(|m| m.cy()).collect();
    chart.select(XField::Income, now);
    chart.select(XField::Age, now + SECOND / 3);
    let after: Vec<f64> = chart.view().marks.iter().map(|m| m.cy()).collect();
    assert_eq!(ys, after);
}

#[test]
fn test_transition_commands_cover_all_channels() {
    let now = Instant::now();
    let chart = Chart::new(dataset(), ChartConfig::default(), XField::Poverty, now).unwrap();
    let controller = chart.controller();
    let (state, commands) = controller.next(controller.state(), &ChartEvent::click(XField::Income));

    assert_eq!(state.active, XField::Income);
    assert_eq!(commands.len(), 4);
    assert!(matches!(commands[0], RenderCommand::RenderAxis(_)));
    assert!(matches!(
        commands[1],
        RenderCommand::RenderMarks {
            field: XField::Income,
            ..
        }
    ));
    assert_eq!(commands[2], RenderCommand::RebindTooltips(XField::Income));
    assert_eq!(commands[3], RenderCommand::ActivateLabel(XField::Income));
}

#[test]
fn test_tooltip_only_on_hover() {
    let now = Instant::now();
    let mut chart = Chart::new(two_states(), ChartConfig::default(), XField::Poverty, now).unwrap();
    assert!(chart.view().tooltip.is_none());

    let a = chart.view().marks.get(0).unwrap();
    let center = (a.cx_at(now), a.cy());
    chart.hover(Some(center), now);
    assert_eq!(chart.view().tooltip.as_ref().unwrap().html, "A<br>Poverty: 10");

    chart.select(XField::Income, now);
    assert_eq!(chart.view().tooltip.as_ref().unwrap().html, "A<br>Income: 50000");
}
