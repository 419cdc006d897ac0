// Example: animate to a position on an infinite pager.
use arcpager::{PagerOptions, Viewport};
use arcpager_adapter::{PagerEvent, ScrollCoordinator};

fn main() {
    let mut c = ScrollCoordinator::new(PagerOptions::new().with_infinite(true), 5)
        .expect("valid options");
    c.set_viewport(Viewport {
        main: 800.0,
        cross: 600.0,
    });

    c.smooth_scroll_to_position(-7, 0);
    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }

    let scrolled = c
        .drain_events()
        .iter()
        .filter(|e| matches!(e, PagerEvent::Scrolled { .. }))
        .count();
    println!(
        "{scrolled} frames, offset={} index={}",
        c.pager().offset(),
        c.pager().current_position()
    );
}
