// Example: one pull-to-refresh cycle driven by synthetic touch events and a fake clock.
use pullrefresh::{DragSample, Edge, PullEventListener, PullOptions, PullRefresh, RefreshTicket};

#[derive(Default)]
struct Log {
    ticket: Option<RefreshTicket>,
}

impl PullEventListener for Log {
    fn on_pull_started(&mut self, edge: Edge) {
        println!("pull started: {edge:?}");
    }

    fn on_pull_threshold(&mut self, edge: Edge, above: bool) {
        println!("threshold {edge:?}: above={above}");
    }

    fn on_refresh_request(&mut self, edge: Edge, ticket: RefreshTicket) {
        println!("refresh requested: {edge:?}");
        self.ticket = Some(ticket);
    }

    fn on_request_complete(&mut self, edge: Edge, success: bool) {
        println!("refresh complete {edge:?}: success={success}");
    }

    fn on_pull_ended(&mut self, edge: Edge) {
        println!("pull ended: {edge:?}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut total = 0i32;
    let mut p = PullRefresh::new(
        PullOptions::new().with_request_complete_delay_ms(200),
        |delta: i32| total += delta,
        Log::default(),
    )?;
    p.on_pulled_view_laid_out(Edge::Top, 100.0, 40.0)?;
    p.on_scroll_position_changed(0, 10, 50);
    p.on_overscrolled(true);

    p.on_touch_event(DragSample::down(0.0, 0));
    for (i, y) in [1.0, 40.0, 90.0, 150.0].into_iter().enumerate() {
        p.on_touch_event(DragSample::moved(y, i as u64 * 16));
        println!("y={y} state={:?} offset={:.2}", p.state(), p.offset());
    }
    p.on_touch_event(DragSample::up(150.0, 64));

    let mut now_ms = 64;
    while let Some(next) = p.tick(now_ms) {
        now_ms = next;
    }
    println!("pinned: state={:?} offset={}", p.state(), p.applied_offset());

    // The host's refresh finishes half a second later.
    now_ms += 500;
    if let Some(ticket) = p.listener_mut().ticket.take() {
        p.complete_refresh(ticket, true, now_ms)?;
    }
    while let Some(next) = p.tick(now_ms) {
        now_ms = next;
    }
    println!("done at t={now_ms}: state={:?} offset={}", p.state(), p.applied_offset());

    drop(p);
    println!("sum of deltas={total}");
    Ok(())
}
