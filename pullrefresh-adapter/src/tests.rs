use crate::*;

use pullrefresh::{DragSample, Edge, OffsetSink, Phase, PullError, PullOptions, PullState};

fn controller() -> Controller {
    let mut c = Controller::new(PullOptions::new().with_request_complete_delay_ms(300)).unwrap();
    c.on_pulled_view_laid_out(Edge::Top, 100.0, 40.0).unwrap();
    c.on_pulled_view_laid_out(Edge::Bottom, 100.0, 40.0).unwrap();
    c
}

fn pull_past_threshold(c: &mut Controller) {
    c.on_overscrolled(true);
    c.on_touch_event(DragSample::down(0.0, 0));
    c.on_touch_event(DragSample::moved(1.0, 0));
    c.on_touch_event(DragSample::moved(201.0, 16));
    c.on_touch_event(DragSample::up(201.0, 32));
}

/// Ticks every frame until nothing is scheduled. Returns the last offset seen.
fn run_frames(c: &mut Controller, mut now_ms: u64) -> (u64, i32) {
    let mut last = c.offset();
    while let Some(off) = c.tick(now_ms) {
        last = off;
        now_ms += 16;
        assert!(now_ms < 100_000, "animation did not finish");
    }
    (now_ms, last)
}

#[test]
fn accumulator_tracks_absolute_offset() {
    let mut acc = OffsetAccumulator::new();
    acc.apply_offset_delta(10);
    acc.apply_offset_delta(-3);
    acc.apply_offset_delta(0);
    assert_eq!(acc.offset(), 7);
    assert_eq!(acc.applied_count(), 3);
    assert_eq!(acc.undo(), -7);
    assert_eq!(acc.offset(), 0);
}

#[test]
fn event_queue_preserves_order() {
    let mut c = controller();
    pull_past_threshold(&mut c);
    let events = c.drain_events();
    assert_eq!(
        events,
        vec![
            PullEvent::Started { edge: Edge::Top },
            PullEvent::Threshold {
                edge: Edge::Top,
                above: true
            },
        ]
    );
    assert!(c.drain_events().is_empty());
    assert!(events.iter().all(|e| e.edge() == Edge::Top));
}

#[test]
fn controller_runs_a_full_refresh_cycle() {
    let mut c = controller();
    pull_past_threshold(&mut c);
    assert_eq!(c.state(), PullState::active(Edge::Top, Phase::ThresholdReleased));
    assert!(c.offset() > 60);
    assert!(c.is_animating());

    let (now_ms, last) = run_frames(&mut c, 32);
    assert_eq!(last, 60);
    assert_eq!(c.state(), PullState::active(Edge::Top, Phase::Waiting));
    let ticket = c.pending_refresh().unwrap();
    assert_eq!(ticket.edge(), Edge::Top);
    assert!(c.drain_events().contains(&PullEvent::RefreshRequested {
        edge: Edge::Top,
        ticket
    }));

    // Nothing moves until the host reports completion.
    assert_eq!(c.tick(now_ms + 5000), None);

    c.finish_refresh(true, now_ms).unwrap();
    assert_eq!(c.pending_refresh(), None);
    assert_eq!(c.next_deadline_ms(), Some(now_ms + 300));
    assert_eq!(
        c.finish_refresh(true, now_ms),
        Err(PullError::CompletionPending { edge: Edge::Top })
    );

    let mut prev = c.offset();
    let mut t = now_ms;
    while let Some(off) = c.tick(t) {
        assert!(off <= prev);
        prev = off;
        t += 16;
    }
    assert_eq!(c.state(), PullState::Idle);
    assert_eq!(c.offset(), 0);
    assert_eq!(
        c.drain_events(),
        vec![
            PullEvent::RequestComplete {
                edge: Edge::Top,
                success: true
            },
            PullEvent::Ended { edge: Edge::Top },
        ]
    );
}

#[test]
fn finish_refresh_without_request_is_rejected() {
    let mut c = controller();
    assert!(matches!(
        c.finish_refresh(true, 0),
        Err(PullError::NotWaiting { .. })
    ));
    assert!(c.drain_events().is_empty());
}

#[test]
fn touch_down_cancels_release() {
    let mut c = controller();
    c.on_overscrolled(true);
    c.on_touch_event(DragSample::down(0.0, 0));
    c.on_touch_event(DragSample::moved(1.0, 0));
    assert!(c.on_touch_event(DragSample::moved(41.0, 16)));
    c.on_touch_event(DragSample::up(41.0, 32));
    c.tick(32);
    let held = c.offset();
    assert!(held > 0);

    c.on_touch_event(DragSample::down(41.0, 40));
    assert!(!c.is_animating());
    assert_eq!(c.tick(100), None);
    assert_eq!(c.offset(), held);
}

#[test]
fn detach_returns_content_to_rest() {
    let mut c = controller();
    pull_past_threshold(&mut c);
    let offset = c.offset();
    assert_eq!(c.detach(), -offset);
    assert_eq!(c.next_deadline_ms(), None);
    assert_eq!(c.offset(), 0);
}

#[test]
fn invalid_options_are_rejected() {
    assert!(Controller::new(PullOptions::new().with_easing(2.0)).is_err());
    let mut c = controller();
    assert!(c.on_pulled_view_laid_out(Edge::Top, 10.0, 20.0).is_err());
}
