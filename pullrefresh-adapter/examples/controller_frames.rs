use pullrefresh::{DragSample, Edge, PullOptions};
use pullrefresh_adapter::{Controller, PullEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: an immediate-mode UI loop using the controller.
    //
    // An adapter would:
    // - forward pointer events and overscroll state
    // - call tick(now_ms) every frame while work is scheduled
    // - shift the list by the returned offset
    // - drain events once per frame and start/finish refreshes in response
    let mut c = Controller::new(PullOptions::new().with_request_complete_delay_ms(250))?;
    c.on_pulled_view_laid_out(Edge::Bottom, 80.0, 20.0)?;
    c.on_scroll_position_changed(90, 10, 100);
    c.on_overscrolled(true);

    c.on_touch_event(DragSample::down(500.0, 0));
    let history = [480.0, 440.0, 390.0];
    c.on_touch_event(DragSample::moved(499.0, 8));
    c.on_touch_event(DragSample::moved(330.0, 16).with_history(&history));
    c.on_touch_event(DragSample::up(330.0, 24));

    let mut now_ms = 24u64;
    let mut refresh_done_at = None;
    for _ in 0..1_000 {
        let off = c.tick(now_ms);
        for event in c.drain_events() {
            println!("t={now_ms} {event:?}");
            if let PullEvent::RefreshRequested { .. } = event {
                // Pretend the network call takes 400ms.
                refresh_done_at = Some(now_ms + 400);
            }
        }
        if refresh_done_at.is_some_and(|t| now_ms >= t) {
            refresh_done_at = None;
            c.finish_refresh(true, now_ms)?;
        }
        let idle = c.next_deadline_ms().is_none() && c.pending_refresh().is_none();
        if idle && refresh_done_at.is_none() {
            break;
        }
        if let Some(off) = off {
            if now_ms % 80 == 0 {
                println!("t={now_ms} offset={off} state={:?}", c.state());
            }
        }
        now_ms += 16;
    }

    println!("done: offset={} state={:?}", c.offset(), c.state());
    Ok(())
}
