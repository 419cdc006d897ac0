// Example: drag, fling and snap, driven by a fake 60 Hz clock.
use arcpager::{PagerOptions, Viewport};
use arcpager_adapter::{ScrollCoordinator, SnapEngine, Velocity};

fn main() {
    let mut c = ScrollCoordinator::new(PagerOptions::new(), 12).expect("valid options");
    c.set_viewport(Viewport {
        main: 1080.0,
        cross: 1920.0,
    });
    c.attach_snap(SnapEngine::new(), 0).expect("no engine attached yet");

    let mut now_ms = 0u64;
    c.pointer_down(now_ms);
    for _ in 0..5 {
        now_ms += 16;
        c.drag_by(40.0);
    }
    c.pointer_up(Velocity::new(2_500.0, 0.0), now_ms);

    while c.is_animating() {
        now_ms += 16;
        if let Some(offset) = c.tick(now_ms) {
            println!("t={now_ms}ms offset={offset:.2}");
        }
    }

    for event in c.drain_events() {
        println!("{event:?}");
    }
    println!("settled on {}", c.pager().current_position());
}
