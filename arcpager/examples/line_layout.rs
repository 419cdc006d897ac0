// Example: a straight pager with scaled neighbours, plus a config change.
use arcpager::{Invalidation, Pager, PagerOptions, ShapeKind};

fn main() {
    let mut pager = Pager::new(PagerOptions::line(400.0, 0.8), 20).expect("valid options");

    pager.scroll_by(600.0);
    for item in pager.visible_items() {
        let t = pager.compute_transform(item.slot.position);
        println!(
            "position={} x={:.1} scale={:.2} elevation={:.2}",
            item.slot.position, t.x, t.scale, t.elevation
        );
    }

    let kind = pager
        .update_options(|o| o.shape = ShapeKind::Line { min_scale: 0.6 })
        .expect("valid options");
    assert_eq!(kind, Invalidation::Rebuild);
    println!("state={:?}", pager.save_state());
}
